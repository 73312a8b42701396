use log::debug;
use rayon::prelude::*;

use crate::wordbag::Wordbag;

/// Parallel ingestion
/// Each text is read into its own bag on the rayon pool and the bags are
/// combined pairwise through `reduce`, so no bag is shared between threads.
impl Wordbag {
    /// Count every word of every text
    /// same result as calling `textract` on each text in turn
    pub fn par_textract<S>(texts: &[S]) -> Wordbag
    where
        S: AsRef<str> + Sync,
    {
        let bag = texts
            .par_iter()
            .map(|text| {
                let mut bag = Wordbag::new();
                bag.textract(text.as_ref());
                bag
            })
            .reduce(Wordbag::new, |mut acc, bag| {
                acc.merge(&bag);
                acc
            });
        debug!("par_textract: {} texts, {} words, total {}", texts.len(), bag.total_words(), bag.total);
        bag
    }

    /// Document-frequency bag over `texts`
    /// same result as calling `occurences_textract` on each text in turn
    pub fn par_document_frequency<S>(texts: &[S]) -> Wordbag
    where
        S: AsRef<str> + Sync,
    {
        let bag = texts
            .par_iter()
            .map(|text| {
                let mut document = Wordbag::new();
                document.once_textract(text.as_ref());
                document
            })
            .reduce(Wordbag::new, |mut acc, document| {
                // once-bags hold only 1s, so merging them adds one per document
                acc.merge(&document);
                acc
            });
        debug!("par_document_frequency: {} texts, {} words", texts.len(), bag.total_words());
        bag
    }
}
