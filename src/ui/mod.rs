pub mod actions;
pub mod app;
pub mod checkbox;
pub mod dialog;
pub mod instant;
pub mod list;
pub mod relationship;
