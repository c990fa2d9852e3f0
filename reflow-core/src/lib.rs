//! Paragraph reflow engine
//!
//! This crate provides the text transformation behind the `reflow` tool:
//! filler-word removal, whitespace normalization, and re-flowing sentences
//! into paragraphs bounded by sentence count and word count.

#![warn(missing_docs)]

pub mod formatter;

pub use formatter::{format, ParagraphFormatter};
