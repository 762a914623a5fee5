pub mod album;
pub mod store;
