//! Format implementations
//!
//! Each format lives in its own module and implements the Format trait.
//! See ../format.rs for the trait definition.

pub mod json;
pub mod markdown;
