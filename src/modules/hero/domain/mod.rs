pub mod entities;

pub use entities::{ApproachStep, HeroData, HeroDraft, SocialLinks, UniqueTrait};
