//! In-memory album catalog served over HTTP: list, fetch by id, and create.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
