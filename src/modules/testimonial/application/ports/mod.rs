use crate::shared::store::ResourceRepository;
use crate::testimonial::domain::{Testimonial, TestimonialDraft};

pub type TestimonialRepository =
    dyn ResourceRepository<Record = Testimonial, Draft = TestimonialDraft>;
