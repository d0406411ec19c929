pub mod create_public_share;
