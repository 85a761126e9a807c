//! Stores a namespace definition
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Ns {
	pub kv: Atom,
	pub ns: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>) -> Ns {
	Ns::new(kv, ns)
}

impl Categorise for Ns {
	fn categorise(&self) -> Category {
		Category::Namespace
	}
}

impl Ns {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
		}
	}
}

impl Key for Ns {
	fn encode(&self) -> Vec<u8> {
		Encoder::new().atom(&self.kv).lit("!").lit("n").atom(&self.ns).finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("!").lit("n").atom();
	}
}

impl Display for Ns {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/!/n/{}", self.kv, self.ns)
	}
}
