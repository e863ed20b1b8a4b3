pub mod entities;

pub use entities::{EducationDraft, EducationEntry};
