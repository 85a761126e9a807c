pub trait GeometricMean {
	/// The nth root of the product of n values
	fn geometric_mean(&self) -> f64;
}

impl GeometricMean for Vec<f64> {
	fn geometric_mean(&self) -> f64 {
		match self.len() {
			0 => f64::NAN,
			len => (self.iter().map(|v| v.ln()).sum::<f64>() / len as f64).exp(),
		}
	}
}
