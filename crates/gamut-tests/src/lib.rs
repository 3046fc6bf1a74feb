//! Integration tests for gamut-rs crates.
//!
//! End-to-end tests that exercise the full path from primaries through
//! fragment generation to assembled GLSL programs.
