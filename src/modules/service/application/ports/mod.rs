use crate::service::domain::{Service, ServiceDraft};
use crate::shared::store::ResourceRepository;

pub type ServiceRepository = dyn ResourceRepository<Record = Service, Draft = ServiceDraft>;
