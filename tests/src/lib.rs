//! # DSL Status Test Suite
//!
//! Unified test crate for the decode pipeline.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Full-pipeline flows
//!     └── pipeline.rs   # Known-answer vector, gates, cross-key rejection
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dsl-status-tests
//! ```

pub mod integration;
