pub mod classify;
pub mod content;
pub mod feedback;
pub mod project;
