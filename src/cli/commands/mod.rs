pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod status;
pub mod test_connection;
