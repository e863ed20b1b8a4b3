pub mod entities;

pub use entities::{Testimonial, TestimonialDraft};
