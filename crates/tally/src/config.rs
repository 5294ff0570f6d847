//!
//! Embedded-TOML configuration for the benchmark binary.
//!
//! The model is parsed once from a string embedded at compile time; nothing
//! is read from disk or the environment at runtime. Validation runs before
//! the model is installed, so any bound the rest of the crate sees is
//! guaranteed summable without overflow.
//!

use crate::sum::{self, MAX_EXACT_BOUND};
use serde::Deserialize;
use std::{cell::RefCell, sync::Arc};
use thiserror::Error as ThisError;

thread_local! {
    static CONFIG: RefCell<Option<Arc<ConfigModel>>> = const { RefCell::new(None) };
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    #[error("config has not been initialized")]
    NotInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// The configured bound sums past `u64::MAX`.
    #[error("bound {0} exceeds the largest exactly-summable bound {MAX_EXACT_BOUND}")]
    UnrepresentableBound(u64),
}

///
/// Defaults
///

mod defaults {
    pub const fn bound() -> u64 {
        crate::sum::DEFAULT_BOUND
    }
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    /// Exclusive upper bound of the summed range.
    #[serde(default = "defaults::bound")]
    pub bound: u64,
}

impl ConfigModel {
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if sum::closed_form(self.bound).is_none() {
            return Err(ConfigError::UnrepresentableBound(self.bound));
        }

        Ok(())
    }

    #[cfg(test)]
    #[must_use]
    pub fn test_default() -> Self {
        Self::default()
    }
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            bound: defaults::bound(),
        }
    }
}

///
/// Config
///

pub struct Config {}

impl Config {
    /// Install the global configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<(), ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        CONFIG.with(|cfg| {
            let mut borrow = cfg.borrow_mut();
            if borrow.is_some() {
                return Err(ConfigError::AlreadyInitialized);
            }
            *borrow = Some(Arc::new(config));

            Ok(())
        })
    }

    pub fn get() -> Result<Arc<ConfigModel>, ConfigError> {
        CONFIG.with(|cfg| {
            if let Some(config) = cfg.borrow().as_ref() {
                return Ok(config.clone());
            }

            #[cfg(test)]
            {
                Ok(Self::init_for_tests())
            }

            #[cfg(not(test))]
            {
                Err(ConfigError::NotInitialized)
            }
        })
    }

    /// Test-only: reset the global config so tests can reinitialize.
    #[cfg(test)]
    pub fn reset_for_tests() {
        CONFIG.with(|cfg| {
            *cfg.borrow_mut() = None;
        });
    }

    /// Test-only: ensure a minimal validated config is available.
    #[cfg(test)]
    #[must_use]
    pub fn init_for_tests() -> Arc<ConfigModel> {
        CONFIG.with(|cfg| {
            let mut borrow = cfg.borrow_mut();
            if let Some(existing) = borrow.as_ref() {
                return existing.clone();
            }

            let config = ConfigModel::test_default();
            config.validate().expect("test config must validate");

            let arc = Arc::new(config);
            *borrow = Some(arc.clone());
            arc
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::DEFAULT_BOUND;

    #[test]
    fn parses_and_validates_a_bound() {
        Config::reset_for_tests();
        Config::init_from_toml("bound = 45\n").unwrap();
        assert_eq!(Config::get().unwrap().bound, 45);
    }

    #[test]
    fn empty_toml_falls_back_to_the_shipped_bound() {
        Config::reset_for_tests();
        Config::init_from_toml("").unwrap();
        assert_eq!(Config::get().unwrap().bound, DEFAULT_BOUND);
    }

    #[test]
    fn double_init_is_rejected() {
        Config::reset_for_tests();
        Config::init_from_toml("bound = 1\n").unwrap();
        let err = Config::init_from_toml("bound = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Config::reset_for_tests();
        let err = Config::init_from_toml("bond = 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn unrepresentable_bounds_are_rejected() {
        Config::reset_for_tests();
        let err = Config::init_from_toml("bound = 6_074_001_001\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnrepresentableBound(6_074_001_001)
        ));
    }

    #[test]
    fn zero_bound_is_valid() {
        ConfigModel { bound: 0 }.validate().unwrap();
    }
}
