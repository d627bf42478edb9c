pub mod config;
pub mod form;
pub mod types;
