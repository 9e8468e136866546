pub mod component;
pub mod idea;
pub mod project;
pub mod user;
