pub mod entities;

pub use entities::{Project, ProjectDraft};
