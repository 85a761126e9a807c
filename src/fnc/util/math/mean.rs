pub trait Mean {
	fn mean(&self) -> f64;
}

impl Mean for Vec<f64> {
	fn mean(&self) -> f64 {
		let len = self.len() as f64;
		let sum = self.iter().sum::<f64>();

		// Will be NaN if len is 0
		sum / len
	}
}
