pub mod cursor_kind;
pub mod diagnostic;

pub use cursor_kind::*;
pub use diagnostic::*;
