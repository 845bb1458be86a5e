use thiserror::Error;

pub type Result<T> = std::result::Result<T, VarintError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VarintError {
    #[error("invalid input: {value} is negative")]
    InvalidInput { value: i128 },

    #[error("truncated input: no terminating byte after {consumed} bytes")]
    TruncatedInput { consumed: usize },

    #[error("non-canonical encoding: {len} bytes with a redundant trailing zero group")]
    NonCanonicalEncoding { len: usize },

    #[error("overflow: value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}

/// Report a rejected decode at debug level and hand the error back.
pub(crate) fn rejected(err: VarintError) -> VarintError {
    log::debug!("varint decode rejected: {err}");
    err
}
