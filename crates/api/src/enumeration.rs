use std::fmt;
use std::hash::Hash;

/// An integer-coded enumeration published by libclang.
///
/// Values are `(code, name)` pairs plus a class: whatever classification the
/// enumeration attaches to a value (the group of a cursor kind, nothing for
/// a diagnostic severity). The registry in `cindex-core` owns one instance
/// per code and hands out `&'static` references to it, so two lookups of the
/// same code are the same object.
pub trait Enumeration:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Prefix of the `Enumeration.VALUE` display form.
    const ENUMERATION: &'static str;

    type Class: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// Build a value from its parts. Registries call this for extensions;
    /// anything else gets a value that is equal to, but not, the singleton.
    fn from_parts(code: i32, name: &'static str, class: Self::Class) -> Self;

    fn code(&self) -> i32;

    fn name(&self) -> &'static str;

    fn class(&self) -> Self::Class;

    /// Class given to a value registered without one, derived from where
    /// the native library places its code.
    fn default_class(code: i32) -> Self::Class;

    /// The fixed table as published by the native library.
    fn builtins() -> &'static [Self];
}

/// Class function for enumerations that carry no classification.
pub const fn unclassified(_code: i32) {}

/// Declares an enumeration value type together with its builtin table.
///
/// Every listed entry becomes an associated constant named after the
/// symbolic name, classified by the `class` function, and the same entries
/// (in order) make up [`Enumeration::builtins`].
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub struct $ty:ident as $label:literal {
            class: $class:ty = $classify:path;
            $($code:literal => $name:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub struct $ty {
            code: i32,
            name: &'static str,
            #[serde(skip)]
            class: $class,
        }

        impl $ty {
            $(
                pub const $name: $ty = $ty {
                    code: $code,
                    name: stringify!($name),
                    class: $classify($code),
                };
            )*

            pub const fn code(&self) -> i32 {
                self.code
            }

            pub const fn name(&self) -> &'static str {
                self.name
            }
        }

        impl $crate::enumeration::Enumeration for $ty {
            const ENUMERATION: &'static str = $label;

            type Class = $class;

            fn from_parts(code: i32, name: &'static str, class: $class) -> Self {
                Self { code, name, class }
            }

            fn code(&self) -> i32 {
                self.code
            }

            fn name(&self) -> &'static str {
                self.name
            }

            fn class(&self) -> $class {
                self.class
            }

            fn default_class(code: i32) -> $class {
                $classify(code)
            }

            fn builtins() -> &'static [Self] {
                static BUILTINS: &[$ty] = &[$($ty::$name),*];
                BUILTINS
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}.{}", $label, self.name)
            }
        }
    };
}
