pub mod nextcloud_auth;
