pub mod editor;
pub mod handlers;
pub mod projects;
