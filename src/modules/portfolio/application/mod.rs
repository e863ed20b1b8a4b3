pub mod failure_reporting;
pub mod ports;
pub mod services;

pub use failure_reporting::FailureReporting;
