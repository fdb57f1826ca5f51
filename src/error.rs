use thiserror::Error;

/// Errors raised by the enum set containers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumSetError {
    /// The variant cannot be stored in the set, either because its ordinal does
    /// not fit the bitmap width or because it exceeds the declared variant count
    #[error("{variant} has ordinal {ordinal} which is too big for this set (limit {limit})")]
    OrdinalOutOfRange {
        variant: &'static str,
        ordinal: usize,
        limit: usize,
    },

    #[error("mutation called for frozen instance of {type_name}")]
    Frozen { type_name: &'static str },

    /// A character which is not part of the alphabet or token list
    #[error("invalid enum set character: {0:?}")]
    InvalidToken(char),

    #[error("duplicate enum set character: {0:?}")]
    DuplicateToken(char),

    #[error("no more elements in the enum set")]
    EndOfSequence,

    #[error("elements cannot be removed through an enum set iterator")]
    UnsupportedRemoval,
}
