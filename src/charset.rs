use std::fmt;

use tracing::debug;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A category of characters that can be mixed into a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order pools are assembled.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub const fn charset(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        self.charset().contains(ch)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// The characters a generator samples from.
///
/// A pool is never empty: the only ways to build one are
/// [`GenerationConfig::pool`](crate::GenerationConfig::pool), which rejects an
/// empty selection, and the crate-internal constructor used by presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Concatenates the character sets of `classes` in canonical order,
    /// whatever order they were passed in. Duplicates are ignored.
    pub(crate) fn from_classes(classes: &[CharacterClass]) -> Self {
        let chars: Vec<char> = CharacterClass::ALL
            .into_iter()
            .filter(|class| classes.contains(class))
            .flat_map(|class| class.charset().chars())
            .collect();
        debug!(?classes, size = chars.len(), "built character pool");

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}
