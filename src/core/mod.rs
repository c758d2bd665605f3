//! Core building blocks shared by every layer: math, randomness, logging macros.

#[macro_use]
pub mod utils;
pub mod math;
pub mod random;
