pub mod auth;
pub mod config;
pub mod entrance;
pub mod error;
pub mod ocs;
pub mod path;
pub mod remote_file;
pub mod webdav;
