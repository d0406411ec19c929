pub mod nextcloud_config;
