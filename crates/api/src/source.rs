/// Anything the native library can hand back a cursor-kind code for.
///
/// This is the only thing the binding asks of a parsed tree node: the
/// registry turns the raw code into a typed value.
pub trait CursorKindSource {
    fn kind_code(&self) -> i32;
}

impl CursorKindSource for i32 {
    fn kind_code(&self) -> i32 {
        *self
    }
}

impl<T: CursorKindSource + ?Sized> CursorKindSource for &T {
    fn kind_code(&self) -> i32 {
        (**self).kind_code()
    }
}
