//! Format-agnostic helpers shared by formats and the resolver.

pub mod paths;
