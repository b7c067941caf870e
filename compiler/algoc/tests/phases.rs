// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based interpreter tests.
//!
//! Whole programs go through the public driver entry points
//! (`algoc::lex_text`, `algoc::parse_text`, `algoc::run_source`), one
//! module per phase:
//!
//! - `lex/` - grouping and visible-text reconstruction
//! - `parse/` - program structure and syntax errors
//! - `eval/` - end-to-end runs with a scripted console
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p algoc --test phases
//! cargo test -p algoc --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/lex/mod.rs"]
mod lex;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/eval/mod.rs"]
mod eval;
