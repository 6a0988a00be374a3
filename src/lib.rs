//! Single in-memory account balances and an inclusive range check.
//!
//! - [`domain::Account`]: exact decimal balance with validated deposit and
//!   withdrawal
//! - [`domain::FloatAccount`]: unvalidated `f64` prototype of the same idea
//! - [`RangeValidator`]: reports whether a value falls outside `[min, max]`
//! - [`config`] and [`logging`]: tracing setup driven by environment variables

pub mod config;
pub mod domain;
pub mod logging;
pub mod range_validator;

pub use config::{Config, ConfigError};
pub use domain::{Account, AccountNumber, Error, FloatAccount};
pub use range_validator::RangeValidator;
