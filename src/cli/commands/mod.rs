pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod request;
pub mod status;
pub mod users;
