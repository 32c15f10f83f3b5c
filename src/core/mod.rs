//! Configuration and wire models shared by the API handler and the client.

pub mod config;
pub mod models;
