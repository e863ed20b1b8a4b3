use crate::experience::domain::{ExperienceDraft, ExperienceEntry};
use crate::shared::store::ResourceRepository;

pub type ExperienceRepository =
    dyn ResourceRepository<Record = ExperienceEntry, Draft = ExperienceDraft>;
