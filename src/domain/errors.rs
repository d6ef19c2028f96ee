#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    MalformedPayload(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::MalformedPayload(msg) => {
                write!(f, "Malformed navigation payload: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
