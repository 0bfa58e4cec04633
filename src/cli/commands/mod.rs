pub mod list;
pub mod project;
pub mod reset;
pub mod todo;
