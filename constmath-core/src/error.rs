use thiserror::Error;

/// Domain errors reported by the [`checked`](crate::checked) API.
///
/// The plain functions never return this: they encode the same conditions as NaN or
/// infinities. The checked variants classify the argument first and only then delegate.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DomainError {
    #[error("NaN passed to {function}")]
    NanInput { function: &'static str },

    #[error("Argument {value} is outside the domain of {function}")]
    OutOfDomain {
        function: &'static str,
        value: String,
    },

    #[error("{function} has a pole at {value}")]
    Pole {
        function: &'static str,
        value: String,
    },
}

impl DomainError {
    /// Name of the function that rejected its argument.
    pub fn function(&self) -> &'static str {
        match self {
            DomainError::NanInput { function }
            | DomainError::OutOfDomain { function, .. }
            | DomainError::Pole { function, .. } => function,
        }
    }
}
