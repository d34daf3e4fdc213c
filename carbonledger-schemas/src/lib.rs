//! Serializable data model for the Carbonledger footprint calculator.
//!
//! These types carry no behaviour beyond defaults and lenient parsing; the
//! estimator itself lives in `carbonledger-core`.

pub mod factors;
pub mod file_formats;
pub mod input;
pub mod profile;
