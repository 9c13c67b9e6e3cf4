//! Unit tests for `kagura_core` types.

mod match_tests;
mod rule_tests;
