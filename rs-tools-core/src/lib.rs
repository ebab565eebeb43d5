//! Small-calculator library backing the rs-tools command-line utilities.
//!
//! This crate provides the computation layer shared by three standalone
//! CLI tools:
//! - Constrained random password generation (adjacent-distinct strings)
//! - Electricity consumption and cost estimation
//! - 3D-printer remaining-filament estimation
//!
//! Only the computation layer lives here. Flag parsing, help rendering and
//! console formatting belong to the binaries.

/// Constrained random string generation (alphabets, requests, generator).
pub mod password;

/// Electricity consumption and cost estimation.
pub mod energy;

/// Remaining-filament length and price-per-meter estimation.
pub mod filament;

/// Shared numeric helpers (display rounding).
pub mod util;
