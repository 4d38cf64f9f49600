#[macro_use]
pub mod enumeration;
pub mod error;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use enumeration::Enumeration;
pub use error::{KindError, KindResult};
pub use models::*;
pub use source::CursorKindSource;
