pub mod card;
pub mod relay;

pub use crate::domain::model::{AcceptedContact, ContactSubmission, MessageCard, WebhookResponse};
pub use crate::domain::ports::{WebhookConfigSource, WebhookSender, WebhookTarget};
pub use crate::utils::error::Result;
