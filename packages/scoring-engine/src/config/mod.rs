//! Runtime configuration for match rules.

pub mod rules;
