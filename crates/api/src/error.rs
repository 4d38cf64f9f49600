#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    #[error("{enumeration} value {code} is already registered as {existing}")]
    DuplicateRegistration {
        enumeration: &'static str,
        code: i32,
        existing: String,
    },
    #[error("Unknown {enumeration} code: {code}")]
    UnknownCode { enumeration: &'static str, code: i32 },
    #[error("Unknown {enumeration} name: {name}")]
    UnknownName {
        enumeration: &'static str,
        name: String,
    },
}

pub type KindResult<T> = std::result::Result<T, KindError>;
