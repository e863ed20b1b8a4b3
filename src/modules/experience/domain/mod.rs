pub mod entities;

pub use entities::{ExperienceDraft, ExperienceEntry};
