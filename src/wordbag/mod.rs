pub mod textract;
pub mod merge;
pub mod stats;
pub mod histogram;
pub mod serde;
pub mod par;

use indexmap::IndexMap;
use log::{trace, warn};
use ::serde::{Deserialize, Serialize};

/// Wordbag
/// A multiset of words with per-word occurrence counts and a cached total.
///
/// It manages:
/// - The count of occurrences of each word
/// - The running total of all counts, kept for O(1) reads
///
/// No entry ever holds a count of 0; a word whose count would drop below 1
/// is removed.
///
/// # Examples
/// ```
/// use wordbag::Wordbag;
/// let mut bag = Wordbag::new();
/// bag.textract("a b a c a b");
///
/// assert_eq!(bag.word_count("a"), 3);
/// assert_eq!(bag.total_count(), 6);
/// assert_eq!(bag.top(1), vec!["a".to_string()]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(try_from = "crate::wordbag::serde::RawWordbag")]
pub struct Wordbag {
    #[serde(with = "indexmap::map::serde_seq")]
    words: IndexMap<String, u64>,
    total: u64,
}

/// Two bags are equal when they hold the same words with the same counts.
impl PartialEq for Wordbag {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Wordbag {}

/// Counting primitives
impl Wordbag {
    /// Create an empty Wordbag
    pub fn new() -> Self {
        Wordbag {
            words: IndexMap::new(),
            total: 0,
        }
    }

    /// Create an empty Wordbag with room for `capacity` distinct words
    pub fn with_capacity(capacity: usize) -> Self {
        Wordbag {
            words: IndexMap::with_capacity(capacity),
            total: 0,
        }
    }

    /// Add `n` occurrences of a word
    ///
    /// # Arguments
    /// * `word` - the word
    /// * `n` - number of occurrences to add
    ///
    /// Adding 0 to an absent word leaves the bag untouched.
    /// An add that would overflow the word's count or the total is dropped
    /// as a whole, leaving the bag unchanged.
    #[inline]
    pub fn add(&mut self, word: &str, n: u64) -> &mut Self {
        if n == 0 {
            return self;
        }
        let Some(total) = self.total.checked_add(n) else {
            warn!("add {:?}: total {} + {} overflows, ignored", word, self.total, n);
            return self;
        };
        match self.words.get_mut(word) {
            Some(count) => match count.checked_add(n) {
                Some(sum) => *count = sum,
                None => {
                    warn!("add {:?}: count {} + {} overflows, ignored", word, *count, n);
                    return self;
                }
            },
            None => {
                self.words.insert(word.to_string(), n);
            }
        }
        self.total = total;
        self
    }

    /// Subtract `n` occurrences of a word
    ///
    /// Does nothing if the word is absent. If the remaining count drops below 1
    /// the word is removed, but the total is still decremented by the full `n`
    /// (floored at 0), so callers see their own accounting reflected in
    /// `total_count`.
    ///
    /// # Arguments
    /// * `word` - the word
    /// * `n` - number of occurrences to subtract
    #[inline]
    pub fn sub(&mut self, word: &str, n: u64) -> &mut Self {
        let Some(count) = self.words.get_mut(word) else {
            return self;
        };
        if *count > n {
            *count -= n;
        } else {
            if *count < n {
                trace!("sub {:?}: requested {} exceeds stored count {}", word, n, *count);
            }
            self.words.swap_remove(word);
        }
        if self.total < n {
            trace!("sub {:?}: total {} floored at 0 (requested {})", word, self.total, n);
        }
        self.total = self.total.saturating_sub(n);
        self
    }

    /// Record a word as present, once
    ///
    /// Inserts the word with count 1 only if it is absent; repeated calls have
    /// no further effect.
    #[inline]
    pub fn once(&mut self, word: &str) -> &mut Self {
        if !self.words.contains_key(word) {
            self.add(word, 1);
        }
        self
    }

    /// Remove a word entirely, decrementing the total by its full count
    #[inline]
    pub fn none(&mut self, word: &str) -> &mut Self {
        if let Some(count) = self.words.swap_remove(word) {
            self.total = self.total.saturating_sub(count);
        }
        self
    }

    /// Reset all counts
    #[inline]
    pub fn clear(&mut self) {
        self.words.clear();
        self.total = 0;
    }

    /// Iterate over every word and its count, in no particular order
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl<S> Extend<S> for Wordbag
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref(), 1);
        }
    }
}

impl<S> FromIterator<S> for Wordbag
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut bag = Wordbag::new();
        bag.extend(iter);
        bag
    }
}
