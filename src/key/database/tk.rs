//! Stores a token definition under a database
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Dt {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tk: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tk: impl Into<Atom>,
) -> Dt {
	Dt::new(kv, ns, db, tk)
}

impl Categorise for Dt {
	fn categorise(&self) -> Category {
		Category::DatabaseToken
	}
}

impl Dt {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tk: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tk: tk.into(),
		}
	}
}

impl Key for Dt {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("!")
			.lit("k")
			.atom(&self.tk)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tk = d.lit("!").lit("k").atom();
	}
}

impl Display for Dt {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}/!/k/{}", self.kv, self.ns, self.db, self.tk)
	}
}
