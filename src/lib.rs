// src/lib.rs
//! Extracts structured controls from the text rendering of a CIS benchmark.
//!
//! The converted document is split into one span per numbered control
//! (`extractors::segment`), and each span is parsed into an immutable
//! [`Control`](extractors::Control) by anchor-delimited field extraction.

pub mod converter;
pub mod extractors;
pub mod storage;
pub mod utils;
