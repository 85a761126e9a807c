//! Stores a scope definition under a database
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Sc {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub sc: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	sc: impl Into<Atom>,
) -> Sc {
	Sc::new(kv, ns, db, sc)
}

impl Categorise for Sc {
	fn categorise(&self) -> Category {
		Category::Scope
	}
}

impl Sc {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		sc: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			sc: sc.into(),
		}
	}
}

impl Key for Sc {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("!")
			.lit("s")
			.atom(&self.sc)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.sc = d.lit("!").lit("s").atom();
	}
}

impl Display for Sc {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}/!/s/{}", self.kv, self.ns, self.db, self.sc)
	}
}
