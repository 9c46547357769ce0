//! Character classes and pool building for password generation.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named, fixed set of characters usable as a draw source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Single-letter code used by the command line and settings file.
    pub fn letter(self) -> char {
        match self {
            CharacterClass::Uppercase => 'u',
            CharacterClass::Lowercase => 'l',
            CharacterClass::Digit => 'd',
            CharacterClass::Symbol => 's',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(CharacterClass::Uppercase),
            'l' => Some(CharacterClass::Lowercase),
            'd' => Some(CharacterClass::Digit),
            's' => Some(CharacterClass::Symbol),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled classes. Iterates in canonical order regardless of
/// insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    /// Parse a string of class letters such as `"uld"`.
    /// Returns the offending character on failure.
    pub fn from_letters(s: &str) -> Result<Self, char> {
        s.chars()
            .map(|c| CharacterClass::from_letter(c).ok_or(c))
            .collect()
    }

    pub fn letters(&self) -> String {
        self.iter().map(CharacterClass::letter).collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Characters of the enabled classes, kept both merged and per class.
#[derive(Debug, Clone)]
pub struct Pool {
    classes: Vec<Vec<char>>,
    merged: Vec<char>,
}

impl Pool {
    /// Build the pool from the enabled classes, in class order.
    pub fn build(classes: &ClassSet) -> Self {
        let classes: Vec<Vec<char>> = classes
            .iter()
            .map(|class| class.chars().chars().collect())
            .collect();
        let merged = classes.iter().flatten().copied().collect();
        Self { classes, merged }
    }

    /// Per-class character sets, in class order.
    pub fn classes(&self) -> &[Vec<char>] {
        &self.classes
    }

    /// Concatenation of every class set. Repeats across classes are kept.
    pub fn merged(&self) -> &[char] {
        &self.merged
    }

    /// Each pool character once, first occurrence order.
    pub fn distinct(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.merged.len());
        for &c in &self.merged {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }

    pub fn distinct_len(&self) -> usize {
        self.distinct().len()
    }

    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes() {
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Digit.chars().len(), 10);
        assert_eq!(CharacterClass::Symbol.chars().len(), 32);
    }

    #[test]
    fn classes_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a != b {
                    let overlap = a.chars().chars().any(|c| b.chars().contains(c));
                    assert!(!overlap, "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn symbols_are_ascii_punctuation() {
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
        let all_punct = (0u8..128).filter(|b| b.is_ascii_punctuation()).count();
        assert_eq!(SYMBOLS.len(), all_punct);
    }

    #[test]
    fn set_iterates_in_canonical_order() {
        let set: ClassSet = [CharacterClass::Symbol, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Uppercase, CharacterClass::Symbol]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn letters_parse_and_print() {
        let set = ClassSet::from_letters("sdU").unwrap();
        assert_eq!(set.letters(), "uds");
        assert_eq!(ClassSet::from_letters("ux"), Err('x'));
        assert!(ClassSet::from_letters("").unwrap().is_empty());
    }

    #[test]
    fn remove_class() {
        let mut set = ClassSet::all();
        set.remove(CharacterClass::Digit);
        assert!(!set.contains(CharacterClass::Digit));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn pool_keeps_merged_and_per_class() {
        let set = ClassSet::empty()
            .with(CharacterClass::Digit)
            .with(CharacterClass::Uppercase);
        let pool = Pool::build(&set);
        assert_eq!(pool.classes().len(), 2);
        assert_eq!(pool.classes()[0].len(), 26);
        assert_eq!(pool.classes()[1].len(), 10);
        assert_eq!(pool.len(), 36);
        assert_eq!(pool.merged()[0], 'A');
        assert_eq!(pool.merged()[26], '0');
        assert_eq!(pool.distinct_len(), 36);
    }

    #[test]
    fn full_pool_has_94_distinct() {
        assert_eq!(Pool::build(&ClassSet::all()).distinct_len(), 94);
    }
}
