/// Errors raised when change-making input fails validation.
///
/// An unreachable target is not an error; solvers report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("denomination set is empty")]
    EmptyDenominations,

    #[error("denomination at index {index} is not positive")]
    NonPositiveDenomination { index: usize },

    #[error("target value is negative")]
    NegativeTarget,

    #[error("value does not fit in a lookup table index")]
    TargetOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
