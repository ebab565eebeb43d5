use std::f64::consts::PI;

/// Physical description of a filament spool.
///
/// Weights are in grams, diameter in millimeters, density in g/cm³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spool {
	pub empty_weight_g: f64,
	pub actual_weight_g: f64,
	pub diameter_mm: f64,
	pub density_g_cm3: f64,
}

impl Spool {
	/// Filament mass left on the spool, in grams.
	pub fn filament_mass_g(&self) -> f64 {
		self.actual_weight_g - self.empty_weight_g
	}

	/// Estimated remaining filament length in meters.
	///
	/// `length = mass / (density * π * (diameter / 2)²)`, with the
	/// diameter in millimeters and the density in g/cm³. The unit blend
	/// makes the cross-section term come out in grams per meter, so the
	/// quotient is meters directly.
	pub fn remaining_length_m(&self) -> f64 {
		let ray = self.diameter_mm / 2.0;
		let cross_section = PI * ray.powi(2);
		self.filament_mass_g() / (self.density_g_cm3 * cross_section)
	}

	/// Price of one meter of filament given the spool price.
	pub fn price_per_meter(&self, spool_price: f64) -> f64 {
		spool_price / self.remaining_length_m()
	}
}
