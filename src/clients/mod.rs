//! Client modules for external API interactions

pub mod notes_client;

pub use notes_client::NotesClient;
