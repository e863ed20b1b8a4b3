use crate::education::domain::{EducationDraft, EducationEntry};
use crate::shared::store::ResourceRepository;

pub type EducationRepository =
    dyn ResourceRepository<Record = EducationEntry, Draft = EducationDraft>;
