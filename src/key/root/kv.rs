//! Stores the root of the key value store
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Kv {
	pub kv: Atom,
}

pub fn new(kv: impl Into<Atom>) -> Kv {
	Kv::new(kv)
}

impl Categorise for Kv {
	fn categorise(&self) -> Category {
		Category::Root
	}
}

impl Kv {
	pub fn new(kv: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
		}
	}
}

impl Key for Kv {
	fn encode(&self) -> Vec<u8> {
		Encoder::new().atom(&self.kv).finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
	}
}

impl Display for Kv {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}", self.kv)
	}
}
