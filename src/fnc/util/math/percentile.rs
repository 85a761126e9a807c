pub trait Percentile {
	/// The value below the given percent of the sorted data, linearly
	/// interpolated between adjacent ranks
	fn percentile(&self, perc: f64) -> f64;
}

impl Percentile for Vec<f64> {
	fn percentile(&self, perc: f64) -> f64 {
		if self.is_empty() || !(0.0..=100.0).contains(&perc) {
			return f64::NAN;
		}
		let mut v = self.clone();
		v.sort_by(|a, b| a.total_cmp(b));
		let rank = perc / 100.0 * (v.len() - 1) as f64;
		let base = rank.floor() as usize;
		match v.get(base + 1) {
			Some(next) => v[base] + rank.fract() * (next - v[base]),
			None => v[base],
		}
	}
}
