//! Core data model for the Kagura structural search engine.
//!
//! This crate provides the canonical type definitions shared across the
//! Kagura pipeline: source spans, match results, placeholder bindings, the
//! declarative rule model, and engine configuration.  It is re-exported by
//! the `kagura` facade crate for public consumption.
//!
//! # Core types
//!
//! - [`Span`] and [`LineCol`] — byte and line/column source positions
//! - [`Match`] — a successful pattern or rule match with captured bindings
//! - [`Bindings`] — placeholder name → captured text map
//! - [`Rule`] and [`RuleGenerator`] — the recursive rule description
//! - [`EngineConfig`] — parse-cache sizing
//!
//! # Example
//!
//! ```
//! use kagura_core::{LineCol, Span};
//!
//! let span = Span::new(0, 10, LineCol::new(1, 1), LineCol::new(1, 11));
//! assert_eq!(span.start_byte(), 0);
//! assert_eq!(span.len(), 10);
//! ```

mod bindings;
mod config;
mod match_result;
mod rule;
mod span;

pub use bindings::Bindings;
pub use config::EngineConfig;
pub use match_result::Match;
pub use rule::{Rule, RuleGenerator};
pub use span::{LineCol, Span};

#[cfg(test)]
mod tests;
