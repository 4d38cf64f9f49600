//! Boundary with libclang.
//!
//! The binding only ever asks the native library for the kind code of a
//! cursor. Everything else about a cursor (its data pointers, the
//! translation unit it belongs to) is opaque here and owned by libclang.

use cindex_api::CursorKindSource;
use std::ffi::{c_int, c_void};

#[cfg(feature = "libclang")]
use std::ffi::c_uint;

/// Mirror of libclang's `CXCursor`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXCursor {
    pub kind: c_int,
    pub xdata: c_int,
    pub data: [*const c_void; 3],
}

impl CXCursor {
    /// A cursor carrying a kind and no native data.
    pub fn with_kind(kind: c_int) -> Self {
        Self {
            kind,
            xdata: 0,
            data: [std::ptr::null(); 3],
        }
    }
}

#[cfg(feature = "libclang")]
#[link(name = "clang")]
unsafe extern "C" {
    pub fn clang_getCursorKind(cursor: CXCursor) -> c_int;
    pub fn clang_isDeclaration(kind: c_int) -> c_uint;
    pub fn clang_isReference(kind: c_int) -> c_uint;
    pub fn clang_isExpression(kind: c_int) -> c_uint;
    pub fn clang_isStatement(kind: c_int) -> c_uint;
    pub fn clang_isAttribute(kind: c_int) -> c_uint;
    pub fn clang_isInvalid(kind: c_int) -> c_uint;
    pub fn clang_isTranslationUnit(kind: c_int) -> c_uint;
    pub fn clang_isPreprocessing(kind: c_int) -> c_uint;
    pub fn clang_isUnexposed(kind: c_int) -> c_uint;
}

impl CursorKindSource for CXCursor {
    #[cfg(feature = "libclang")]
    fn kind_code(&self) -> i32 {
        // SAFETY: the cursor is passed by value and libclang only reads its kind.
        unsafe { clang_getCursorKind(*self) }
    }

    #[cfg(not(feature = "libclang"))]
    fn kind_code(&self) -> i32 {
        self.kind
    }
}

/// Cross-checks of the local classification against the native predicates.
#[cfg(feature = "libclang")]
pub mod native {
    use super::*;
    use crate::error::{CindexError, Result};
    use cindex_api::CursorKind;

    type NativePredicate = unsafe extern "C" fn(c_int) -> c_uint;

    fn predicates() -> [(&'static str, NativePredicate, fn(&CursorKind) -> bool); 9] {
        [
            ("is_declaration", clang_isDeclaration, CursorKind::is_declaration),
            ("is_reference", clang_isReference, CursorKind::is_reference),
            ("is_expression", clang_isExpression, CursorKind::is_expression),
            ("is_statement", clang_isStatement, CursorKind::is_statement),
            ("is_attribute", clang_isAttribute, CursorKind::is_attribute),
            ("is_invalid", clang_isInvalid, CursorKind::is_invalid),
            (
                "is_translation_unit",
                clang_isTranslationUnit,
                CursorKind::is_translation_unit,
            ),
            ("is_preprocessing", clang_isPreprocessing, CursorKind::is_preprocessing),
            ("is_unexposed", clang_isUnexposed, CursorKind::is_unexposed),
        ]
    }

    /// Fails on the first predicate where libclang disagrees with `kind`.
    pub fn check_classification(kind: &CursorKind) -> Result<()> {
        for (predicate, native_fn, local_fn) in predicates() {
            // SAFETY: the predicates are pure functions of the kind code.
            let native = unsafe { native_fn(kind.code()) } != 0;
            let local = local_fn(kind);
            if native != local {
                return Err(CindexError::ClassificationMismatch {
                    kind: *kind,
                    predicate,
                    local,
                    native,
                });
            }
        }
        Ok(())
    }
}
