use super::percentile::Percentile;

pub trait Trimean {
	/// The weighted mean of the median and the two quartiles
	fn trimean(&self) -> f64;
}

impl Trimean for Vec<f64> {
	fn trimean(&self) -> f64 {
		(self.percentile(25.0) + 2.0 * self.percentile(50.0) + self.percentile(75.0)) / 4.0
	}
}
