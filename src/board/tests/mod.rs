//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published reference values
//! - `draw.rs` - Repetition detection along played lines
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
