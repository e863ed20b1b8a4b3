pub mod auth;
pub mod blog;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod portfolio;
pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;
