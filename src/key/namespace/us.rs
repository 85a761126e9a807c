//! Stores a login definition under a namespace
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Nu {
	pub kv: Atom,
	pub ns: Atom,
	pub us: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, us: impl Into<Atom>) -> Nu {
	Nu::new(kv, ns, us)
}

impl Categorise for Nu {
	fn categorise(&self) -> Category {
		Category::NamespaceLogin
	}
}

impl Nu {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, us: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			us: us.into(),
		}
	}
}

impl Key for Nu {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("!")
			.lit("u")
			.atom(&self.us)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.us = d.lit("!").lit("u").atom();
	}
}

impl Display for Nu {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/!/u/{}", self.kv, self.ns, self.us)
	}
}
