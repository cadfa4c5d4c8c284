use ahash::AHashMap;

const ENGLISH_CONTRACTIONS: [(&str, &str); 7] = [
    ("n't", "not"),
    ("'m", "am"),
    ("'s", "is"),
    ("'re", "are"),
    ("'d", "would"),
    ("'ll", "will"),
    ("'ve", "have"),
];

/// Read-only mapping from contraction suffix tokens to full words.
#[derive(Debug, Clone)]
pub struct ContractionTable {
    entries: AHashMap<&'static str, &'static str>,
}

impl ContractionTable {
    /// The seven English suffix tokens produced by splitting words such as
    /// `don't` into `do` + `n't`.
    pub fn english() -> Self {
        Self {
            entries: ENGLISH_CONTRACTIONS.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive lookup. Unknown tokens are returned as-is.
    #[inline]
    pub fn expand<'a>(&self, token: &'a str) -> &'a str {
        self.entries.get(token).copied().unwrap_or(token)
    }

    pub fn expand_all<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        tokens.into_iter().map(move |token| self.expand(token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContractionTable {
    fn default() -> Self {
        Self::english()
    }
}
