use cindex_api::{CursorKind, CursorKindSource, DiagnosticSeverity, Enumeration, KindResult};
use once_cell::sync::Lazy;

use crate::registry::KindRegistry;

static CURSOR_KINDS: Lazy<KindRegistry<CursorKind>> = Lazy::new(KindRegistry::with_builtins);
static DIAGNOSTIC_SEVERITIES: Lazy<KindRegistry<DiagnosticSeverity>> =
    Lazy::new(KindRegistry::with_builtins);

/// Lookups against the process-wide registry of an enumeration.
///
/// With this trait in scope the registry reads like part of the type:
/// `CursorKind::from_value(43)`, `CursorKind::all_kinds()`.
pub trait Registered: Enumeration {
    fn registry() -> &'static KindRegistry<Self>;

    fn register(code: i32, name: impl Into<String>) -> KindResult<&'static Self> {
        Self::registry().register(code, name)
    }

    fn register_with(
        code: i32,
        name: impl Into<String>,
        class: Self::Class,
    ) -> KindResult<&'static Self> {
        Self::registry().register_with(code, name, class)
    }

    fn from_value(code: i32) -> KindResult<&'static Self> {
        Self::registry().from_value(code)
    }

    fn from_name(name: &str) -> KindResult<&'static Self> {
        Self::registry().from_name(name)
    }

    fn all_kinds() -> Vec<&'static Self> {
        Self::registry().all_kinds()
    }

    /// The registered singleton equal to this value.
    fn registered(&self) -> KindResult<&'static Self> {
        Self::registry().from_value(self.code())
    }
}

impl Registered for CursorKind {
    fn registry() -> &'static KindRegistry<Self> {
        &CURSOR_KINDS
    }
}

impl Registered for DiagnosticSeverity {
    fn registry() -> &'static KindRegistry<Self> {
        &DIAGNOSTIC_SEVERITIES
    }
}

/// Kind of the node behind `source`, as reported by the native library.
pub fn cursor_kind_of(source: &impl CursorKindSource) -> KindResult<&'static CursorKind> {
    CursorKind::registry().kind_of(source)
}
