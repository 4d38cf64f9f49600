pub mod config;
pub mod error;
pub mod ffi;
pub mod kinds;
pub mod logging;
pub mod registry;

pub use cindex_api::{
    CursorKind, CursorKindSource, DiagnosticSeverity, Enumeration, KindError, KindGroup,
};
pub use config::{AppliedKinds, CursorKindEntry, KindEntry, KindTable};
pub use error::{CindexError, Result};
pub use ffi::CXCursor;
pub use kinds::{Registered, cursor_kind_of};
pub use registry::KindRegistry;
