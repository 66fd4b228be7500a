pub mod message;
pub mod render;

pub use message::{Attachment, Field, ResponseType, SlackMessage};
