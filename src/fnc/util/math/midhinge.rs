use super::percentile::Percentile;

pub trait Midhinge {
	/// The mean of the first and third quartile
	fn midhinge(&self) -> f64;
}

impl Midhinge for Vec<f64> {
	fn midhinge(&self) -> f64 {
		(self.percentile(75.0) + self.percentile(25.0)) / 2.0
	}
}
