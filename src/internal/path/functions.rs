pub mod dav_url;
pub mod resolve_remote_path;
