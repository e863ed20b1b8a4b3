use crate::project::domain::{Project, ProjectDraft};
use crate::shared::store::ResourceRepository;

pub type ProjectRepository = dyn ResourceRepository<Record = Project, Draft = ProjectDraft>;
