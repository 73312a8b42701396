use crate::wordbag::Wordbag;

/// Separator used by every text ingestion method.
/// Text is split on each occurrence, so consecutive, leading or trailing
/// separators produce empty-string words.
pub const WORD_SEPARATOR: char = ' ';

/// Text ingestion
impl Wordbag {
    /// Count every word of `text`
    ///
    /// # Arguments
    /// * `text` - text split on `WORD_SEPARATOR`
    pub fn textract(&mut self, text: &str) -> &mut Self {
        for word in text.split(WORD_SEPARATOR) {
            self.add(word, 1);
        }
        self
    }

    /// Count every word of `text` after filtering and mapping it
    ///
    /// # Arguments
    /// * `text` - text split on `WORD_SEPARATOR`
    /// * `mapper` - converts a kept word before it is counted
    /// * `discard` - returns true for words to drop; sees the raw word
    pub fn textract_map_filter<M, S, D>(&mut self, text: &str, mapper: M, discard: D) -> &mut Self
    where
        M: Fn(&str) -> S,
        S: AsRef<str>,
        D: Fn(&str) -> bool,
    {
        for word in text.split(WORD_SEPARATOR) {
            if !discard(word) {
                self.add(mapper(word).as_ref(), 1);
            }
        }
        self
    }

    /// Record which words of `text` occurred, ignoring repetition
    pub fn once_textract(&mut self, text: &str) -> &mut Self {
        for word in text.split(WORD_SEPARATOR) {
            self.once(word);
        }
        self
    }

    /// `once_textract` with a mapper and a discard predicate
    pub fn once_textract_map_filter<M, S, D>(&mut self, text: &str, mapper: M, discard: D) -> &mut Self
    where
        M: Fn(&str) -> S,
        S: AsRef<str>,
        D: Fn(&str) -> bool,
    {
        for word in text.split(WORD_SEPARATOR) {
            if !discard(word) {
                self.once(mapper(word).as_ref());
            }
        }
        self
    }

    /// Increment the count of every distinct word of `text` by one
    ///
    /// Treats `text` as one document: a word counts at most once however often
    /// it repeats. Repeated over a corpus this builds a document-frequency bag,
    /// the expected input of `idf`.
    pub fn occurences_textract(&mut self, text: &str) -> &mut Self {
        let mut document = Wordbag::new();
        document.once_textract(text);
        self.occurences_add(&document)
    }

    /// `occurences_textract` with a mapper and a discard predicate
    pub fn occurences_textract_map_filter<M, S, D>(&mut self, text: &str, mapper: M, discard: D) -> &mut Self
    where
        M: Fn(&str) -> S,
        S: AsRef<str>,
        D: Fn(&str) -> bool,
    {
        let mut document = Wordbag::new();
        document.once_textract_map_filter(text, mapper, discard);
        self.occurences_add(&document)
    }
}
