use super::percentile::Percentile;

pub trait InterQuartile {
	/// The range between the first and third quartile
	fn interquartile(&self) -> f64;
}

impl InterQuartile for Vec<f64> {
	fn interquartile(&self) -> f64 {
		self.percentile(75.0) - self.percentile(25.0)
	}
}
