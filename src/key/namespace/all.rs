//! Stores the root of all keys under a namespace
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Namespace {
	pub kv: Atom,
	pub ns: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>) -> Namespace {
	Namespace::new(kv, ns)
}

impl Categorise for Namespace {
	fn categorise(&self) -> Category {
		Category::NamespaceRoot
	}
}

impl Namespace {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
		}
	}
}

impl Key for Namespace {
	fn encode(&self) -> Vec<u8> {
		Encoder::new().atom(&self.kv).lit("*").atom(&self.ns).finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
	}
}

impl Display for Namespace {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}", self.kv, self.ns)
	}
}
