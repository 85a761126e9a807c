pub trait NearestRank {
	/// The value at the nearest rank of the sorted data
	fn nearest_rank(&self, perc: f64) -> f64;
}

impl NearestRank for Vec<f64> {
	fn nearest_rank(&self, perc: f64) -> f64 {
		if self.is_empty() || !(0.0..=100.0).contains(&perc) {
			return f64::NAN;
		}
		let mut v = self.clone();
		v.sort_by(|a, b| a.total_cmp(b));
		let rank = (perc / 100.0 * v.len() as f64).ceil() as usize;
		v[rank.saturating_sub(1).min(v.len() - 1)]
	}
}
