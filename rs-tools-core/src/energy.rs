use log::debug;
use thiserror::Error;

/// Reasons a duration input cannot be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DurationError {
	/// Expected 1 to 3 comma-separated components.
	#[error("duration must hold 1 to 3 components, got {0}")]
	InvalidComponentCount(usize),
}

/// Consumption and cost for one device over one operating window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageEstimate {
	/// Total operating time in decimal hours.
	pub total_hours: f64,
	/// Energy drawn over the window, in kWh.
	pub consumption_kwh: f64,
	/// Cost of the window at the given price, in the price's currency.
	pub cost: f64,
}

/// Normalizes duration components to decimal hours.
///
/// Components are right-aligned: one value means minutes, two mean
/// `[hours, minutes]`, three mean `[days, hours, minutes]`. The result is
/// `days * 24 + hours + minutes / 60`.
///
/// # Errors
/// Zero components or more than three is `InvalidComponentCount`. The
/// caller sees a hard error rather than a silent zero-hour window.
pub fn duration_hours(components: &[i64]) -> Result<f64, DurationError> {
	let (days, hours, minutes) = match *components {
		[minutes] => (0, 0, minutes),
		[hours, minutes] => (0, hours, minutes),
		[days, hours, minutes] => (days, hours, minutes),
		_ => return Err(DurationError::InvalidComponentCount(components.len())),
	};

	Ok(days as f64 * 24.0 + hours as f64 + minutes as f64 / 60.0)
}

/// Estimates consumption and cost for a device.
///
/// # Parameters
/// - `watts`: device power draw.
/// - `duration`: operating time components, see [`duration_hours`].
/// - `price_per_kwh`: price of one kWh in the caller's currency.
///
/// `consumption_kwh = watts * hours / 1000`; `cost = consumption_kwh *
/// price_per_kwh`.
pub fn estimate(watts: f64, duration: &[i64], price_per_kwh: f64) -> Result<UsageEstimate, DurationError> {
	let total_hours = duration_hours(duration)?;
	let consumption_kwh = watts * total_hours / 1000.0;
	let cost = consumption_kwh * price_per_kwh;

	debug!("{watts}W over {total_hours}h at {price_per_kwh}/kWh -> {consumption_kwh}kWh");
	Ok(UsageEstimate { total_hours, consumption_kwh, cost })
}

/// Renders decimal hours back to a human-readable duration.
///
/// Produces `"N days, N hours, N minutes"` with singular forms where the
/// value is 1; zero-valued parts are dropped. All-zero input renders as
/// an empty string.
pub fn format_duration(total_hours: f64) -> String {
	let days = (total_hours / 24.0).floor();
	let remaining_hours = total_hours - days * 24.0;
	let hours = remaining_hours.floor();
	let minutes = ((remaining_hours - hours) * 60.0).round();

	let mut parts = Vec::new();

	if days > 0.0 {
		parts.push(format!("{} day{}", days, if days > 1.0 { "s" } else { "" }));
	}
	if hours > 0.0 {
		parts.push(format!("{} hour{}", hours, if hours > 1.0 { "s" } else { "" }));
	}
	if minutes > 0.0 {
		parts.push(format!("{} minute{}", minutes, if minutes > 1.0 { "s" } else { "" }));
	}

	parts.join(", ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn components_are_right_aligned() {
		assert_eq!(duration_hours(&[30]).unwrap(), 0.5);
		assert_eq!(duration_hours(&[1, 30]).unwrap(), 1.5);
		assert_eq!(duration_hours(&[1, 1, 30]).unwrap(), 25.5);
	}

	#[test]
	fn bad_component_counts_are_rejected() {
		assert_eq!(
			duration_hours(&[]).unwrap_err(),
			DurationError::InvalidComponentCount(0)
		);
		assert_eq!(
			duration_hours(&[1, 2, 3, 4]).unwrap_err(),
			DurationError::InvalidComponentCount(4)
		);
	}

	#[test]
	fn one_hour_at_hundred_watts() {
		let report = estimate(100.0, &[0, 1, 0], 0.2276).unwrap();
		assert_eq!(report.total_hours, 1.0);
		assert!((report.consumption_kwh - 0.1).abs() < 1e-12);
		assert!((report.cost - 0.02276).abs() < 1e-12);
	}

	#[test]
	fn multi_day_window() {
		let report = estimate(60.0, &[2, 12, 0], 0.2).unwrap();
		assert_eq!(report.total_hours, 60.0);
		assert!((report.consumption_kwh - 3.6).abs() < 1e-12);
		assert!((report.cost - 0.72).abs() < 1e-12);
	}

	#[test]
	fn duration_rendering_drops_zero_parts() {
		assert_eq!(format_duration(25.5), "1 day, 1 hour, 30 minutes");
		assert_eq!(format_duration(49.0), "2 days, 1 hour");
		assert_eq!(format_duration(0.5), "30 minutes");
		assert_eq!(format_duration(1.0), "1 hour");
		assert_eq!(format_duration(0.0), "");
	}
}
