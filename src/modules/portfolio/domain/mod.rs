pub mod resource;
pub mod view;

pub use resource::ResourceKind;
pub use view::{PortfolioOutcome, PortfolioView, ResourceFailure};
