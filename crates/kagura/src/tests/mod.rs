//! Unit tests for the `kagura` facade.
