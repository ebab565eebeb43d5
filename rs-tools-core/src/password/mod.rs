//! Constrained random string generation.
//!
//! This module provides the password-generation core:
//! - Character pool construction and shuffling (`Alphabet`, `CaseMode`)
//! - A validated, immutable generation request (`GenerationRequest`)
//! - The adjacent-distinct generator itself (`generate`)
//!
//! The generator is intentionally **not** a uniform random sampler: it
//! walks a once-shuffled alphabet by position, only stepping forward when
//! a character would repeat its predecessor. See `generator` for details.

/// Character pool construction: case selection, the special-character
/// set, custom alphabets and the pre-generation shuffle.
pub mod alphabet;

/// The adjacent-distinct generation algorithm and its request type.
pub mod generator;

pub use alphabet::{Alphabet, CaseMode, SPECIAL_CHARS};
pub use generator::{GenerationError, GenerationRequest, generate};
