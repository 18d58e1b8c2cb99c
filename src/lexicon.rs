// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash};

// Word validity oracle and length-ordered word lists.
pub trait Lexicon {
    // case-insensitive.
    fn is_valid(&self, word: &str) -> bool;

    // sorted once, shared for the whole session.
    fn words_by_length(&self, ascending: bool) -> &[String];
}

pub struct WordList {
    words: fash::MyHashSet<String>,
    longest_first: Box<[String]>,
    shortest_first: Box<[String]>,
}

impl WordList {
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        let mut list = Vec::new();
        let mut seen = fash::MyHashSet::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.chars().count() >= 2 && seen.insert(word.clone()) {
                list.push(word);
            }
        }
        // stable, so equal lengths keep file order.
        list.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        let longest_first = list.into_boxed_slice();
        let mut shortest_first = longest_first.clone();
        shortest_first.reverse();
        Self {
            words: seen,
            longest_first,
            shortest_first,
        }
    }

    // one word per line.
    pub fn from_text(giant_string: &str) -> Self {
        Self::from_words(giant_string.lines())
    }

    pub fn read_from_file(filename: &str) -> error::Returns<Self> {
        let t0 = std::time::Instant::now();
        let giant_string = match std::fs::read_to_string(filename) {
            Ok(x) => x,
            Err(err) => {
                return_error!(format!("cannot read lexicon {}: {}", filename, err));
            }
        };
        let word_list = Self::from_text(&giant_string);
        if word_list.is_empty() {
            return_error!(format!("lexicon {} has no words", filename));
        }
        log::info!(
            "loaded {} words from {} in {:?}",
            word_list.len(),
            filename,
            t0.elapsed()
        );
        Ok(word_list)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.longest_first.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.longest_first.is_empty()
    }
}

impl Lexicon for WordList {
    #[inline(always)]
    fn is_valid(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    #[inline(always)]
    fn words_by_length(&self, ascending: bool) -> &[String] {
        if ascending {
            &self.shortest_first
        } else {
            &self.longest_first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_and_ordered() {
        let word_list = WordList::from_text("Kissa\non\nä\nkoira\n  talo \nON\nsaunoja\n");
        assert_eq!(word_list.len(), 5);
        assert!(word_list.is_valid("KISSA"));
        assert!(word_list.is_valid("talo"));
        assert!(!word_list.is_valid("ä"));
        assert_eq!(
            word_list.words_by_length(false),
            ["saunoja", "kissa", "koira", "talo", "on"]
        );
        assert_eq!(
            word_list.words_by_length(true),
            ["on", "talo", "koira", "kissa", "saunoja"]
        );
    }
}
