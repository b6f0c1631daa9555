use clap::ValueEnum;
use rand::{CryptoRng, Rng};

use crate::charset::{CharacterClass, CharacterPool};
use crate::config::GenerationConfig;
use crate::password::Generator;

pub const DEFAULT_LENGTH: usize = 12;
pub const PIN_LENGTH: usize = 6;
pub const SECURE_LENGTH: usize = 24;

const LETTERS_AND_DIGITS: &[CharacterClass] = &[
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Digits,
];

/// Fixed class selections with a default length.
///
/// Every preset enables at least one class, so preset generation cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Preset {
    /// All classes, 12 characters.
    Default,
    /// Letters and digits, no symbols.
    Simple,
    /// Digits only.
    Pin,
    /// All classes, 24 characters.
    Secure,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Default, Preset::Simple, Preset::Pin, Preset::Secure];

    pub const fn default_length(self) -> usize {
        match self {
            Preset::Default | Preset::Simple => DEFAULT_LENGTH,
            Preset::Pin => PIN_LENGTH,
            Preset::Secure => SECURE_LENGTH,
        }
    }

    pub const fn classes(self) -> &'static [CharacterClass] {
        match self {
            Preset::Default | Preset::Secure => &CharacterClass::ALL,
            Preset::Simple => LETTERS_AND_DIGITS,
            Preset::Pin => &[CharacterClass::Digits],
        }
    }

    pub fn config(self, length: usize) -> GenerationConfig {
        let classes = self.classes();
        GenerationConfig::none(length)
            .lowercase(classes.contains(&CharacterClass::Lowercase))
            .uppercase(classes.contains(&CharacterClass::Uppercase))
            .numbers(classes.contains(&CharacterClass::Digits))
            .symbols(classes.contains(&CharacterClass::Symbols))
    }

    pub fn pool(self) -> CharacterPool {
        CharacterPool::from_classes(self.classes())
    }

    pub fn generate_with<R>(self, generator: &mut Generator<R>, length: usize) -> String
    where
        R: Rng + CryptoRng,
    {
        generator.sample(&self.pool(), length)
    }

    pub fn generate(self, length: usize) -> String {
        self.generate_with(&mut Generator::new(), length)
    }
}

pub fn generate_default() -> String {
    Preset::Default.generate(DEFAULT_LENGTH)
}

/// Letters and digits only.
pub fn generate_simple(length: usize) -> String {
    Preset::Simple.generate(length)
}

pub fn generate_pin(length: usize) -> String {
    Preset::Pin.generate(length)
}

/// All four classes; pass [`SECURE_LENGTH`] for the usual 24 characters.
pub fn generate_secure(length: usize) -> String {
    Preset::Secure.generate(length)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::charset::DIGITS;

    #[test]
    fn preset_table() {
        let row = |p: Preset| {
            let c = p.config(p.default_length());
            (c.length, c.include_lowercase, c.include_uppercase, c.include_numbers, c.include_symbols)
        };

        assert_eq!(row(Preset::Default), (12, true, true, true, true));
        assert_eq!(row(Preset::Simple), (12, true, true, true, false));
        assert_eq!(row(Preset::Pin), (6, false, false, true, false));
        assert_eq!(row(Preset::Secure), (24, true, true, true, true));
    }

    #[test]
    fn default_preset_matches_default_config() {
        assert_eq!(Preset::Default.config(DEFAULT_LENGTH), GenerationConfig::DEFAULT);
    }

    #[test]
    fn every_preset_has_a_character_set() {
        for preset in Preset::ALL {
            assert!(!preset.classes().is_empty(), "{preset:?} selects nothing");
            for length in [0, 1, 100] {
                let config = preset.config(length);
                assert!(config.has_character_set());
                assert_eq!(config.pool().unwrap(), preset.pool());
            }
        }
    }

    #[test]
    fn preset_lengths() {
        assert_eq!(generate_default().len(), 12);
        assert_eq!(generate_simple(DEFAULT_LENGTH).len(), 12);
        assert_eq!(generate_pin(PIN_LENGTH).len(), 6);
        assert_eq!(generate_secure(SECURE_LENGTH).len(), 24);
        assert_eq!(generate_secure(0), "");
    }

    #[test]
    fn pin_is_numeric() {
        let pin = generate_pin(PIN_LENGTH);
        assert!(pin.chars().all(|ch| DIGITS.contains(ch)));
    }

    #[test]
    fn simple_has_no_symbols() {
        let password = generate_simple(1_000);
        assert!(password.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }

    #[test]
    fn seeded_preset_matches_seeded_config() {
        let mut a = Generator::with_rng(StdRng::seed_from_u64(9));
        let mut b = Generator::with_rng(StdRng::seed_from_u64(9));

        let from_preset = Preset::Secure.generate_with(&mut a, 24);
        let from_config = b.generate(&Preset::Secure.config(24)).unwrap();
        assert_eq!(from_preset, from_config);
    }
}
