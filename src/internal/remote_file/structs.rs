pub mod directory_entry;
pub mod remote_file_content;
