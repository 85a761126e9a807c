//! Stores a token definition under a namespace
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Nt {
	pub kv: Atom,
	pub ns: Atom,
	pub tk: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, tk: impl Into<Atom>) -> Nt {
	Nt::new(kv, ns, tk)
}

impl Categorise for Nt {
	fn categorise(&self) -> Category {
		Category::NamespaceToken
	}
}

impl Nt {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, tk: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			tk: tk.into(),
		}
	}
}

impl Key for Nt {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("!")
			.lit("k")
			.atom(&self.tk)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.tk = d.lit("!").lit("k").atom();
	}
}

impl Display for Nt {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/!/k/{}", self.kv, self.ns, self.tk)
	}
}
