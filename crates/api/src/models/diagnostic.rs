enumeration! {
    /// Severity of a libclang diagnostic (`CXDiagnosticSeverity`).
    pub struct DiagnosticSeverity as "DiagnosticSeverity" {
        class: () = crate::enumeration::unclassified;

        0 => IGNORED,
        1 => NOTE,
        2 => WARNING,
        3 => ERROR,
        4 => FATAL,
    }
}

impl DiagnosticSeverity {
    /// True when the diagnostic means the code is ill-formed.
    pub fn is_error(&self) -> bool {
        self.code == Self::ERROR.code || self.code == Self::FATAL.code
    }
}
