use num::Num;

use crate::utils::normalizer::IntoNormalizer;
use crate::wordbag::Wordbag;

/// Counts and lookups
impl Wordbag {
    /// Count of a word, 0 if absent
    #[inline]
    pub fn word_count(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Whether the word is in the bag
    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words
    #[inline]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Running total of all counts (document term count)
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.total
    }
}

/// TF / IDF / Chi2
impl Wordbag {
    /// Term frequency
    ///
    /// # Returns
    /// * `f64` - `count / total`, 0.0 if the word is absent or the total is 0
    #[inline]
    pub fn tf(&self, word: &str) -> f64 {
        match self.words.get(word) {
            Some(&count) if self.total > 0 => count as f64 / self.total as f64,
            _ => 0.0,
        }
    }

    /// Inverse document frequency
    ///
    /// Meant for a bag whose counts are document frequencies, i.e. built with
    /// `occurences_textract` or `occurences_add`.
    ///
    /// # Returns
    /// * `f64` - `log10(total / count)`, 0.0 if the word is absent or the total is 0
    #[inline]
    pub fn idf(&self, word: &str) -> f64 {
        match self.words.get(word) {
            Some(&count) if self.total > 0 => (self.total as f64 / count as f64).log10(),
            _ => 0.0,
        }
    }

    /// Chi-squared divergence of self against a reference corpus
    ///
    /// For every word `w` with observed count `o`, the expected count is
    /// `e = corpus.tf(w) * self.total_count()` and `(o - e)^2 / e` is summed.
    /// Words with `e == 0` (absent from the corpus) are skipped.
    ///
    /// # Arguments
    /// * `corpus` - term counts over all documents
    pub fn chi2(&self, corpus: &Wordbag) -> f64 {
        let total = self.total as f64;
        self.words
            .iter()
            .filter_map(|(word, &observed)| {
                let expected = corpus.tf(word) * total;
                if expected > 0.0 {
                    let diff = observed as f64 - expected;
                    Some(diff * diff / expected)
                } else {
                    None
                }
            })
            .sum()
    }

    /// TF of every word
    ///
    /// # Returns
    /// * `Vec<(String, N)>` - words and their TF, converted with `IntoNormalizer`
    pub fn tf_vector<N>(&self) -> Vec<(String, N)>
    where f64: IntoNormalizer<N>, N: Num {
        self.words
            .keys()
            .map(|word| (word.clone(), self.tf(word).into_normalized()))
            .collect()
    }

    /// IDF of every word
    pub fn idf_vector(&self) -> Vec<(String, f64)> {
        self.words
            .keys()
            .map(|word| (word.clone(), self.idf(word)))
            .collect()
    }
}
