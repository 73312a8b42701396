/// This crate is a word-frequency accumulator for bag-of-words analysis.
pub mod wordbag;
pub mod utils;
pub mod error;

/// Wordbag
/// The top-level struct of this crate: a multiset of words with a cached total.
/// It supports:
/// - Counting primitives (add, sub, once, none, clear)
/// - Text ingestion with optional map/filter hooks
/// - Combination with other bags (merge, once_merge, occurences_add, sub_merge)
/// - Statistics (TF, IDF, Chi2, histogram, top/last ranking)
///
/// Text is split on single spaces only; normalization, stop words and
/// stemming are left to the caller through the `_map_filter` hooks.
///
/// # Serialization
/// Supported, including a CBOR helper (`to_cbor` / `from_cbor`).
///
/// # Thread Safety
/// No internal locking. Use `par_textract` / `par_document_frequency` to
/// build bags in parallel, or synchronize externally.
pub use wordbag::Wordbag;

/// Histogram bucket returned by `Wordbag::get_histogram`
pub use wordbag::histogram::HistogramElement;

/// Separator used by text ingestion
pub use wordbag::textract::WORD_SEPARATOR;

/// Error returned by the persistence helpers
pub use error::WordbagError;
