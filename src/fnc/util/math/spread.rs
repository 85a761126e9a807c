pub trait Spread {
	/// The range between the smallest and largest value
	fn spread(&self) -> f64;
}

impl Spread for Vec<f64> {
	fn spread(&self) -> f64 {
		match self.len() {
			0 => f64::NAN,
			_ => {
				let max = self.iter().fold(f64::MIN, |a, &b| a.max(b));
				let min = self.iter().fold(f64::MAX, |a, &b| a.min(b));
				max - min
			}
		}
	}
}
