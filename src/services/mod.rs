pub mod definitions;
pub mod merge;

pub use definitions::{ServiceCategory, ServiceDefinition};
pub use merge::MergedService;
