pub mod defaults;
pub mod slides;
pub mod store;
pub mod types;

pub use store::{ContentStore, SaveOutcome};
pub use types::ContentDocument;
