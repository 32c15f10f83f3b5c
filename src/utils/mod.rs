pub mod mime;
pub mod text;
