pub mod collection;
pub mod get_folders_raw_data;
pub mod relocate;
pub mod send_checked;
pub mod transfer;
