use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordbagError {
    #[error("Encode error: {0}")]
    Encode(#[source] serde_cbor::Error),
    #[error("Decode error: {0}")]
    Decode(#[source] serde_cbor::Error),
    #[error("Stored count of 0 for word {0:?}")]
    ZeroCount(String),
    #[error("Word {0:?} stored more than once")]
    DuplicateWord(String),
    #[error("Sum of stored counts overflows u64")]
    CountOverflow,
    #[error("Stored total {total} exceeds the sum of counts {sum}")]
    TotalExceedsCount { total: u64, sum: u64 },
}
