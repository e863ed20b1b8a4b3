pub mod entities;

pub use entities::{BlogDraft, BlogPost};
