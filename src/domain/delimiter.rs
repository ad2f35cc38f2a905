// ============================================================================
// Delimiter Set
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered set of distinct, non-empty separator strings for one input line.
///
/// Order matters: the tokenizer substitutes delimiters in this order, so a
/// later delimiter only sees text already rewritten by the earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelimiterSet {
    delimiters: SmallVec<[String; 4]>,
}

impl DelimiterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delimiter.
    ///
    /// Returns false (and changes nothing) for an empty string or one
    /// already present.
    pub fn insert(&mut self, delimiter: impl Into<String>) -> bool {
        let delimiter = delimiter.into();
        if delimiter.is_empty() || self.contains(&delimiter) {
            return false;
        }
        self.delimiters.push(delimiter);
        true
    }

    pub fn contains(&self, delimiter: &str) -> bool {
        self.delimiters.iter().any(|d| d == delimiter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for delimiter in iter {
            set.insert(delimiter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut set = DelimiterSet::new();
        assert!(set.insert(","));
        assert!(set.insert("\n"));
        assert!(set.insert("r9r"));

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![",", "\n", "r9r"]);
    }

    #[test]
    fn test_insert_rejects_duplicates_and_empty() {
        let mut set: DelimiterSet = [",", "\n"].into_iter().collect();

        assert!(!set.insert(","));
        assert!(!set.insert(""));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contains() {
        let set: DelimiterSet = ["*", "!!"].into_iter().collect();
        assert!(set.contains("!!"));
        assert!(!set.contains("!"));
        assert!(!DelimiterSet::new().contains(","));
        assert!(DelimiterSet::new().is_empty());
    }
}
