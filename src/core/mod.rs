pub mod add;
pub mod config;
pub mod context;
pub mod list;
