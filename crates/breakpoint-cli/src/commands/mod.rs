//! CLI command implementations.

pub mod check;
pub mod classify;
pub mod rules;
pub mod serve;
