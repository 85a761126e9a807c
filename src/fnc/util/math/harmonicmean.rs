pub trait HarmonicMean {
	/// The reciprocal of the mean of the reciprocals
	fn harmonic_mean(&self) -> f64;
}

impl HarmonicMean for Vec<f64> {
	fn harmonic_mean(&self) -> f64 {
		match self.len() {
			0 => f64::NAN,
			len => len as f64 / self.iter().map(|v| 1.0 / v).sum::<f64>(),
		}
	}
}
