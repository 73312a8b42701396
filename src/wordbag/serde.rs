use indexmap::IndexMap;
use log::debug;
use ::serde::{Deserialize, Serialize};

use crate::error::WordbagError;
use crate::wordbag::Wordbag;

/// Serialized form of a Wordbag
/// Every deserialization of a Wordbag goes through this and `TryFrom`, so a
/// payload that breaks the bag's invariants is rejected whatever the format.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawWordbag {
    pub words: Vec<(String, u64)>,
    pub total: u64,
}

/// Accepts only states `Wordbag`'s own operations can reach:
/// no zero counts, no repeated words, a sum of counts that fits in u64,
/// and a total no larger than that sum (over-subtraction can only lower it).
impl TryFrom<RawWordbag> for Wordbag {
    type Error = WordbagError;

    fn try_from(raw: RawWordbag) -> Result<Self, Self::Error> {
        let mut words = IndexMap::with_capacity(raw.words.len());
        let mut sum: u64 = 0;
        for (word, count) in raw.words {
            if count == 0 {
                return Err(WordbagError::ZeroCount(word));
            }
            sum = sum.checked_add(count).ok_or(WordbagError::CountOverflow)?;
            if words.contains_key(&word) {
                return Err(WordbagError::DuplicateWord(word));
            }
            words.insert(word, count);
        }
        if raw.total > sum {
            return Err(WordbagError::TotalExceedsCount { total: raw.total, sum });
        }
        Ok(Wordbag { words, total: raw.total })
    }
}

/// CBOR persistence
///
/// The bag is stored as its word/count sequence plus the running total, so a
/// decoded bag keeps any total left by over-subtraction.
impl Wordbag {
    pub fn to_cbor(&self) -> Result<Vec<u8>, WordbagError> {
        let bytes = serde_cbor::to_vec(self).map_err(WordbagError::Encode)?;
        debug!("encoded wordbag: {} words, {} bytes", self.total_words(), bytes.len());
        Ok(bytes)
    }

    /// Decode a bag written by `to_cbor`
    /// invariant violations come back as their own `WordbagError` variant
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, WordbagError> {
        let raw: RawWordbag = serde_cbor::from_slice(bytes).map_err(WordbagError::Decode)?;
        let bag = Wordbag::try_from(raw)?;
        debug!("decoded wordbag: {} words, total {}", bag.total_words(), bag.total);
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(words: &[(&str, u64)], total: u64) -> Vec<u8> {
        let raw = RawWordbag {
            words: words.iter().map(|&(w, c)| (w.to_string(), c)).collect(),
            total,
        };
        serde_cbor::to_vec(&raw).unwrap()
    }

    #[test]
    fn cbor_restores_counts_and_total() {
        let mut bag = Wordbag::new();
        bag.textract("a b a c a b");

        let bytes = bag.to_cbor().unwrap();
        let restored = Wordbag::from_cbor(&bytes).unwrap();

        assert_eq!(restored, bag);
        assert_eq!(restored.total_count(), 6);
        assert_eq!(restored.top(0), bag.top(0));
    }

    #[test]
    fn cbor_keeps_drained_total() {
        let mut bag = Wordbag::new();
        bag.add("a", 1).add("b", 3);
        bag.sub("a", 3);

        let restored = Wordbag::from_cbor(&bag.to_cbor().unwrap()).unwrap();
        assert_eq!(restored.total_count(), 1);
        assert_eq!(restored.word_count("b"), 3);
    }

    #[test]
    fn cbor_rejects_zero_count() {
        match Wordbag::from_cbor(&raw(&[("zero", 0)], 0)) {
            Err(WordbagError::ZeroCount(word)) => assert_eq!(word, "zero"),
            other => panic!("expected ZeroCount, got {:?}", other),
        }
    }

    #[test]
    fn cbor_rejects_total_above_counts() {
        match Wordbag::from_cbor(&raw(&[("a", 1)], 100)) {
            Err(WordbagError::TotalExceedsCount { total, sum }) => {
                assert_eq!(total, 100);
                assert_eq!(sum, 1);
            }
            other => panic!("expected TotalExceedsCount, got {:?}", other),
        }
    }

    #[test]
    fn cbor_rejects_duplicate_words() {
        match Wordbag::from_cbor(&raw(&[("a", 1), ("a", 1)], 2)) {
            Err(WordbagError::DuplicateWord(word)) => assert_eq!(word, "a"),
            other => panic!("expected DuplicateWord, got {:?}", other),
        }
    }

    #[test]
    fn cbor_rejects_overflowing_sum() {
        assert!(matches!(
            Wordbag::from_cbor(&raw(&[("a", u64::MAX), ("b", 1)], 0)),
            Err(WordbagError::CountOverflow)
        ));
    }

    #[test]
    fn plain_deserialize_validates_too() {
        // serde_cbor::from_slice goes through the derived Deserialize, not from_cbor
        let zero: Result<Wordbag, _> = serde_cbor::from_slice(&raw(&[("z", 0)], 0));
        assert!(zero.is_err());

        let inflated: Result<Wordbag, _> = serde_cbor::from_slice(&raw(&[("a", 1)], 100));
        assert!(inflated.is_err());

        let ok: Wordbag = serde_cbor::from_slice(&raw(&[("a", 2), ("b", 1)], 3)).unwrap();
        assert_eq!(ok.total_count(), 3);
        assert_eq!(ok.word_count("a"), 2);
    }

    #[test]
    fn cbor_rejects_garbage() {
        assert!(matches!(
            Wordbag::from_cbor(&[0xff, 0x00, 0x13]),
            Err(WordbagError::Decode(_))
        ));
    }
}
