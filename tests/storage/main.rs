//! Storage Integration Tests
//!
//! Tests the on-disk layer without a repository in between:
//! - atomic replacement leaves either the old or the new file, never a mix
//! - reads quarantine malformed lines and keep going
//! - the line format survives a write/read cycle through a real file

#[path = "../common/mod.rs"]
mod common;

mod atomic;
