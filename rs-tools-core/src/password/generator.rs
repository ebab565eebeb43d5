use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::password::alphabet::{Alphabet, CaseMode};

/// Reasons a generation request cannot be built or fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
	/// Requested length is below 1.
	#[error("password length must be at least 1")]
	InvalidLength,

	/// Case flag outside the accepted 1..=3 range.
	#[error("case must be 1 (lower), 2 (upper) or 3 (mixed), got {0}")]
	InvalidCase(i64),

	/// Alphabet holds fewer than 2 characters; the adjacent-distinct
	/// constraint cannot be satisfied.
	#[error("alphabet must hold at least 2 characters")]
	AlphabetTooSmall,
}

/// Immutable, validated description of one generation run.
///
/// ## Responsibilities
/// - Validate the inputs once, at construction
/// - Select between the standard pool and a custom one
/// - Drive shuffle + generation against a caller-supplied RNG
///
/// ## Invariants
/// - `length >= 1`
/// - `custom_alphabet`, when present, is non-empty (an empty string is
///   normalized away so the case/special flags apply instead)
///
/// The request holds no generation state; each call to [`Self::generate`]
/// reshuffles and walks a fresh pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
	length: usize,
	case_mode: CaseMode,
	include_special: bool,
	custom_alphabet: Option<String>,
}

impl GenerationRequest {
	/// Builds a request from validated inputs.
	///
	/// An empty custom alphabet counts as absent, matching the CLI
	/// behavior where `-m ''` falls back to the built pool. A custom
	/// alphabet of a single character is rejected here rather than at
	/// generation time.
	///
	/// # Errors
	/// - `InvalidLength` if `length < 1`
	/// - `AlphabetTooSmall` if a present custom alphabet holds 1 character
	pub fn new(
		length: usize,
		case_mode: CaseMode,
		include_special: bool,
		custom_alphabet: Option<String>,
	) -> Result<Self, GenerationError> {
		if length < 1 {
			return Err(GenerationError::InvalidLength);
		}

		let custom_alphabet = custom_alphabet.filter(|s| !s.is_empty());
		if let Some(custom) = &custom_alphabet {
			// Validate eagerly so a bad pool fails before any RNG use.
			Alphabet::from_custom(custom)?;
		}

		Ok(Self { length, case_mode, include_special, custom_alphabet })
	}

	pub fn length(&self) -> usize {
		self.length
	}

	/// Generates one string satisfying the adjacent-distinct constraint.
	///
	/// Builds the pool (custom or standard), shuffles it once with `rng`,
	/// then walks it by position. Repeated calls reshuffle, so each call
	/// produces an independent string.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerationError> {
		let mut alphabet = match &self.custom_alphabet {
			Some(custom) => Alphabet::from_custom(custom)?,
			None => Alphabet::build(self.case_mode, self.include_special),
		};
		alphabet.shuffle(rng);

		debug!("generating {} chars from a pool of {}", self.length, alphabet.len());
		generate(self.length, &alphabet)
	}
}

/// Generates `length` characters from an already-shuffled alphabet such
/// that no two adjacent characters are equal.
///
/// # Behavior
/// The base index for each output position is `position % alphabet_len`
/// into the fixed pool. When the candidate equals the previous output
/// character, the position counter advances (mod pool length) until a
/// differing character is found; consumed slots are not revisited, so the
/// next output position continues from where the search left off. With a
/// pool of at least 2 characters the search visits every distinct symbol
/// within `alphabet_len` steps, so it always terminates.
///
/// # Distribution caveat
/// This is a deterministic walk through a once-shuffled pool with a local
/// no-repeat patch, not a uniform per-position sampler. The shuffle is the
/// only source of randomness; "fixing" this into uniform draws would
/// change the observable output distribution and is deliberately avoided.
///
/// # Errors
/// Returns `AlphabetTooSmall` when the pool holds fewer than 2 characters.
/// With a single symbol the collision search would never find a differing
/// character for any length above 1.
pub fn generate(length: usize, alphabet: &Alphabet) -> Result<String, GenerationError> {
	if alphabet.len() < 2 {
		return Err(GenerationError::AlphabetTooSmall);
	}

	let chars = alphabet.chars();
	let mut out = String::with_capacity(length);
	let mut previous: Option<char> = None;
	let mut position = 0usize;

	for _ in 0..length {
		let mut current = chars[position % chars.len()];
		while Some(current) == previous {
			position += 1;
			current = chars[position % chars.len()];
		}

		out.push(current);
		previous = Some(current);
		position += 1;
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn seeded(seed: u64) -> StdRng {
		StdRng::seed_from_u64(seed)
	}

	#[test]
	fn output_has_requested_length_and_stays_in_the_pool() {
		let cases = [
			(CaseMode::Lower, false),
			(CaseMode::Upper, false),
			(CaseMode::Mixed, false),
			(CaseMode::Mixed, true),
		];

		for (case_mode, special) in cases {
			let pool = Alphabet::build(case_mode, special);
			let request = GenerationRequest::new(40, case_mode, special, None).unwrap();
			let word = request.generate(&mut seeded(1)).unwrap();

			assert_eq!(word.chars().count(), 40);
			assert!(word.chars().all(|c| pool.contains(c)));
		}
	}

	#[test]
	fn no_two_adjacent_characters_are_equal() {
		for seed in 0..50 {
			let request = GenerationRequest::new(128, CaseMode::Mixed, true, None).unwrap();
			let word = request.generate(&mut seeded(seed)).unwrap();

			let chars: Vec<char> = word.chars().collect();
			assert!(chars.windows(2).all(|w| w[0] != w[1]), "seed {seed}: {word}");
		}
	}

	#[test]
	fn two_char_pool_strictly_alternates() {
		for seed in 0..20 {
			let request =
				GenerationRequest::new(31, CaseMode::Mixed, false, Some("xy".to_owned())).unwrap();
			let word = request.generate(&mut seeded(seed)).unwrap();

			let chars: Vec<char> = word.chars().collect();
			assert_eq!(chars.len(), 31);
			// Which symbol leads depends on the shuffle; alternation does not.
			for (i, c) in chars.iter().enumerate() {
				assert_eq!(*c, chars[i % 2]);
			}
			assert_ne!(chars[0], chars[1]);
		}
	}

	#[test]
	fn single_char_custom_pool_is_rejected() {
		let err = GenerationRequest::new(8, CaseMode::Mixed, false, Some("z".to_owned()));
		assert_eq!(err.unwrap_err(), GenerationError::AlphabetTooSmall);
	}

	#[test]
	fn degenerate_pools_fail_fast_in_the_generator() {
		// Bypass request validation: the generator itself must guard too,
		// otherwise a 1-char pool would spin forever on position 2.
		let single = Alphabet::from_chars(vec!['a']);
		assert_eq!(generate(5, &single).unwrap_err(), GenerationError::AlphabetTooSmall);

		let empty = Alphabet::from_chars(Vec::new());
		assert_eq!(generate(1, &empty).unwrap_err(), GenerationError::AlphabetTooSmall);
	}

	#[test]
	fn empty_custom_pool_falls_back_to_the_built_one() {
		let request =
			GenerationRequest::new(20, CaseMode::Lower, false, Some(String::new())).unwrap();
		let pool = Alphabet::build(CaseMode::Lower, false);
		let word = request.generate(&mut seeded(3)).unwrap();
		assert!(word.chars().all(|c| pool.contains(c)));
	}

	#[test]
	fn zero_length_is_rejected() {
		let err = GenerationRequest::new(0, CaseMode::Mixed, false, None);
		assert_eq!(err.unwrap_err(), GenerationError::InvalidLength);
	}

	#[test]
	fn same_seed_reproduces_the_same_word() {
		let request = GenerationRequest::new(24, CaseMode::Mixed, true, None).unwrap();
		let first = request.generate(&mut seeded(42)).unwrap();
		let second = request.generate(&mut seeded(42)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn multibyte_custom_pool_counts_logical_characters() {
		let request =
			GenerationRequest::new(9, CaseMode::Mixed, false, Some("é€日ß".to_owned())).unwrap();
		let word = request.generate(&mut seeded(11)).unwrap();

		assert_eq!(word.chars().count(), 9);
		assert!(word.chars().all(|c| "é€日ß".contains(c)));
	}
}
