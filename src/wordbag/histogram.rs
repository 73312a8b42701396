use std::cmp::Ordering;
use std::collections::HashMap;

use crate::wordbag::Wordbag;

/// One histogram bucket: how many distinct words share a given count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramElement {
    wordcount: u64,
    count: usize,
}

impl HistogramElement {
    pub fn new(wordcount: u64, count: usize) -> Self {
        HistogramElement { wordcount, count }
    }

    /// The shared count value
    #[inline]
    pub fn wordcount(&self) -> u64 {
        self.wordcount
    }

    /// Number of words with that count
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Histogram and ranking
impl Wordbag {
    /// Group words by count
    ///
    /// # Returns
    /// * `Vec<HistogramElement>` - one element per distinct count, ascending by count
    pub fn get_histogram(&self) -> Vec<HistogramElement> {
        let mut hist: HashMap<u64, usize> = HashMap::new();
        for &count in self.words.values() {
            *hist.entry(count).or_insert(0) += 1;
        }

        let mut results: Vec<HistogramElement> = hist
            .into_iter()
            .map(|(wordcount, count)| HistogramElement::new(wordcount, count))
            .collect();
        results.sort_unstable_by_key(|e| e.wordcount);
        results
    }

    /// The `n` most frequent words, descending by count
    ///
    /// Equal counts are ordered by word ascending. `n == 0` returns every word;
    /// `n` larger than the vocabulary is clamped.
    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked(n, |a, b| b.cmp(&a))
    }

    /// The `n` least frequent words, ascending by count
    ///
    /// Same tie-break and `n` rules as `top`.
    pub fn last(&self, n: usize) -> Vec<String> {
        self.ranked(n, |a, b| a.cmp(&b))
    }

    fn ranked<F>(&self, n: usize, by_count: F) -> Vec<String>
    where
        F: Fn(u64, u64) -> Ordering,
    {
        let mut list: Vec<(&str, u64)> = self.words().collect();
        list.sort_unstable_by(|a, b| by_count(a.1, b.1).then_with(|| a.0.cmp(b.0)));

        let take = if n == 0 { list.len() } else { n.min(list.len()) };
        list.into_iter()
            .take(take)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}
