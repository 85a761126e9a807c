pub trait Top {
	/// The largest `take` values, in descending order
	fn top(&self, take: usize) -> Vec<f64>;
}

impl Top for Vec<f64> {
	fn top(&self, take: usize) -> Vec<f64> {
		let mut v = self.clone();
		v.sort_by(|a, b| b.total_cmp(a));
		v.truncate(take);
		v
	}
}
