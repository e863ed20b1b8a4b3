pub mod api;
pub mod icon;
pub mod maintenance;
pub mod store;
pub mod upstream;
