//! Stride Core Library
//!
//! Search primitives for the stride CLI: single-source shortest paths on
//! weighted directed graphs, and shortest word-ladder discovery over a
//! dictionary.

pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;
