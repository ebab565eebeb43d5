use rand::Rng;
use rand::seq::SliceRandom;

use crate::password::generator::GenerationError;

/// Fixed special-character set appended when specials are requested.
pub const SPECIAL_CHARS: &str = "-#_$%&@^~<>*+!?=";

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";

/// Selects which letter cases populate a built alphabet.
///
/// Digits are always included; `Mixed` carries both letter cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
	Lower,
	Upper,
	Mixed,
}

impl CaseMode {
	/// Maps the CLI `-c` flag value (1, 2 or 3) to a case mode.
	///
	/// # Errors
	/// Returns `GenerationError::InvalidCase` for any other value.
	pub fn from_flag(flag: i64) -> Result<Self, GenerationError> {
		match flag {
			1 => Ok(CaseMode::Lower),
			2 => Ok(CaseMode::Upper),
			3 => Ok(CaseMode::Mixed),
			other => Err(GenerationError::InvalidCase(other)),
		}
	}
}

/// Pool of candidate characters a generated string may draw from.
///
/// ## Responsibilities
/// - Build the pool from a case mode and the optional special set
/// - Accept a caller-supplied custom pool (validated, minimum 2 chars)
/// - Shuffle the pool once before generation begins
///
/// ## Invariants
/// - Operates on decoded `char`s, never raw bytes, so custom pools with
///   multi-byte symbols stay intact
/// - A custom pool always holds at least 2 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	chars: Vec<char>,
}

impl Alphabet {
	/// Builds the standard pool for a case mode.
	///
	/// - `Lower` → lowercase letters + digits
	/// - `Upper` → uppercase letters + digits
	/// - `Mixed` → lowercase + uppercase letters + digits
	///
	/// When `include_special` is set, `SPECIAL_CHARS` is appended.
	pub fn build(case_mode: CaseMode, include_special: bool) -> Self {
		let mut pool = String::new();

		match case_mode {
			CaseMode::Lower => {
				pool.push_str(LETTERS);
				pool.push_str(NUMBERS);
			}
			CaseMode::Upper => {
				pool.push_str(&LETTERS.to_uppercase());
				pool.push_str(NUMBERS);
			}
			CaseMode::Mixed => {
				pool.push_str(LETTERS);
				pool.push_str(&LETTERS.to_uppercase());
				pool.push_str(NUMBERS);
			}
		}

		if include_special {
			pool.push_str(SPECIAL_CHARS);
		}

		Self { chars: pool.chars().collect() }
	}

	/// Builds a pool from a caller-supplied character list.
	///
	/// The list fully replaces the standard pool; case and special flags
	/// do not apply to it.
	///
	/// # Errors
	/// Returns `GenerationError::AlphabetTooSmall` if the list holds
	/// fewer than 2 characters. With a single symbol the adjacent-distinct
	/// constraint is unsatisfiable, and the generator would spin forever
	/// looking for a different one.
	pub fn from_custom(custom: &str) -> Result<Self, GenerationError> {
		let chars: Vec<char> = custom.chars().collect();
		if chars.len() < 2 {
			return Err(GenerationError::AlphabetTooSmall);
		}
		Ok(Self { chars })
	}

	/// Randomly permutes the pool in place.
	///
	/// Performed exactly once per generation; afterwards the generator
	/// walks the pool by position without drawing again.
	pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		self.chars.shuffle(rng);
	}

	/// Number of characters in the pool.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Whether `c` belongs to the pool.
	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	/// Read-only view of the pool characters.
	pub fn chars(&self) -> &[char] {
		&self.chars
	}

	/// Unvalidated constructor for exercising generator guards.
	#[cfg(test)]
	pub(crate) fn from_chars(chars: Vec<char>) -> Self {
		Self { chars }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn built_pool_sizes_match_case_mode() {
		assert_eq!(Alphabet::build(CaseMode::Lower, false).len(), 36);
		assert_eq!(Alphabet::build(CaseMode::Upper, false).len(), 36);
		assert_eq!(Alphabet::build(CaseMode::Mixed, false).len(), 62);
		assert_eq!(Alphabet::build(CaseMode::Mixed, true).len(), 62 + 16);
	}

	#[test]
	fn lower_and_upper_pools_hold_only_their_case() {
		let lower = Alphabet::build(CaseMode::Lower, false);
		assert!(lower.chars().iter().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

		let upper = Alphabet::build(CaseMode::Upper, false);
		assert!(upper.chars().iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
	}

	#[test]
	fn special_set_is_appended_on_request() {
		let pool = Alphabet::build(CaseMode::Lower, true);
		assert!(SPECIAL_CHARS.chars().all(|c| pool.contains(c)));

		let plain = Alphabet::build(CaseMode::Lower, false);
		assert!(SPECIAL_CHARS.chars().all(|c| !plain.contains(c)));
	}

	#[test]
	fn shuffle_preserves_the_character_multiset() {
		let mut rng = StdRng::seed_from_u64(7);
		let reference = Alphabet::build(CaseMode::Mixed, true);
		let mut shuffled = reference.clone();
		shuffled.shuffle(&mut rng);

		let mut a: Vec<char> = reference.chars().to_vec();
		let mut b: Vec<char> = shuffled.chars().to_vec();
		a.sort_unstable();
		b.sort_unstable();
		assert_eq!(a, b);
	}

	#[test]
	fn custom_pool_keeps_multibyte_symbols() {
		let pool = Alphabet::from_custom("aé€日").unwrap();
		assert_eq!(pool.len(), 4);
		assert!(pool.contains('€'));
		assert!(pool.contains('日'));
	}

	#[test]
	fn custom_pool_below_two_chars_is_rejected() {
		assert_eq!(Alphabet::from_custom("").unwrap_err(), GenerationError::AlphabetTooSmall);
		assert_eq!(Alphabet::from_custom("x").unwrap_err(), GenerationError::AlphabetTooSmall);
		assert_eq!(Alphabet::from_custom("é").unwrap_err(), GenerationError::AlphabetTooSmall);
	}

	#[test]
	fn flag_mapping_covers_the_cli_range() {
		assert_eq!(CaseMode::from_flag(1).unwrap(), CaseMode::Lower);
		assert_eq!(CaseMode::from_flag(2).unwrap(), CaseMode::Upper);
		assert_eq!(CaseMode::from_flag(3).unwrap(), CaseMode::Mixed);
		assert!(CaseMode::from_flag(0).is_err());
		assert!(CaseMode::from_flag(4).is_err());
	}
}
