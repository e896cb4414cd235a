pub mod mail;
pub mod validate;

pub use mail::{MailConfig, Mailer};
pub use validate::{ContactErrors, ContactSubmission};
