pub mod backend;
pub mod config;
pub mod page_io;
