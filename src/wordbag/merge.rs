use std::ops::{AddAssign, SubAssign};

use crate::wordbag::Wordbag;

/// Combination with another Wordbag
impl Wordbag {
    /// Add every count of `other` to self
    pub fn merge(&mut self, other: &Wordbag) -> &mut Self {
        self.words.reserve(other.words.len());
        for (word, &count) in other.words.iter() {
            self.add(word, count);
        }
        self
    }

    /// Union of vocabularies; counts of `other` are ignored
    pub fn once_merge(&mut self, other: &Wordbag) -> &mut Self {
        for word in other.words.keys() {
            self.once(word);
        }
        self
    }

    /// Add 1 for every word present in `other`
    /// used to accumulate document frequencies from per-document bags
    pub fn occurences_add(&mut self, other: &Wordbag) -> &mut Self {
        for word in other.words.keys() {
            self.add(word, 1);
        }
        self
    }

    /// Subtract every count of `other` from self (see `sub`)
    pub fn sub_merge(&mut self, other: &Wordbag) -> &mut Self {
        for (word, &count) in other.words.iter() {
            self.sub(word, count);
        }
        self
    }
}

impl AddAssign<&Wordbag> for Wordbag {
    fn add_assign(&mut self, other: &Wordbag) {
        self.merge(other);
    }
}

impl SubAssign<&Wordbag> for Wordbag {
    fn sub_assign(&mut self, other: &Wordbag) {
        self.sub_merge(other);
    }
}
