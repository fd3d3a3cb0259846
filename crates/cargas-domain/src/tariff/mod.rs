//! Static regulatory tables
//!
//! Both tables are fixed at compile time and never change at runtime.

pub mod antt;
pub mod icms;

pub use antt::{coefficient, AnttCoefficient};
pub use icms::rate_between;
