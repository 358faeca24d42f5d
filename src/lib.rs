//! Subtran - Chunked Subtitle Translation
//!
//! Translates SRT subtitle files through an external translation service in
//! size-bounded, line-aligned chunks, and writes the reassembled result to a
//! new file chosen interactively.

pub mod cli;
pub mod config;
pub mod workflow;
pub mod chunk;
pub mod translate;
pub mod export;
pub mod error;
