pub trait Bottom {
	/// The smallest `take` values, in ascending order
	fn bottom(&self, take: usize) -> Vec<f64>;
}

impl Bottom for Vec<f64> {
	fn bottom(&self, take: usize) -> Vec<f64> {
		let mut v = self.clone();
		v.sort_by(|a, b| a.total_cmp(b));
		v.truncate(take);
		v
	}
}
