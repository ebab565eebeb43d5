/// Rounds a value to `digits` decimal places for display.
///
/// Uses half-away-from-zero rounding, so reports show `0.1` rather
/// than `0.10000` once formatted with `{}`.
pub fn round_to(value: f64, digits: u32) -> f64 {
	let factor = 10f64.powi(digits as i32);
	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rounds_to_requested_precision() {
		assert_eq!(round_to(0.022760000001, 5), 0.02276);
		assert_eq!(round_to(332.6040, 2), 332.6);
		assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
	}

	#[test]
	fn rounds_halfway_away_from_zero() {
		assert_eq!(round_to(0.125, 2), 0.13);
		assert_eq!(round_to(-0.125, 2), -0.13);
	}
}
