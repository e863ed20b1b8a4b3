pub mod entities;

pub use entities::{Message, MessageDraft};
