//! Random passwords and PINs drawn from configurable character classes.
//!
//! ```
//! use keygen::{GenerationConfig, generate, generate_pin, PIN_LENGTH};
//!
//! let password = generate(&GenerationConfig::DEFAULT.with_length(16)).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! let pin = generate_pin(PIN_LENGTH);
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! ```

pub mod charset;
pub mod config;
pub mod errors;
pub mod password;
pub mod presets;

pub use charset::{CharacterClass, CharacterPool};
pub use config::GenerationConfig;
pub use errors::{ConfigurationError, SettingsError};
pub use password::{Generator, generate};
pub use presets::{
    DEFAULT_LENGTH, PIN_LENGTH, Preset, SECURE_LENGTH, generate_default, generate_pin,
    generate_secure, generate_simple,
};
