//! Stores a login definition under a database
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Du {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub us: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	us: impl Into<Atom>,
) -> Du {
	Du::new(kv, ns, db, us)
}

impl Categorise for Du {
	fn categorise(&self) -> Category {
		Category::DatabaseLogin
	}
}

impl Du {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		us: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			us: us.into(),
		}
	}
}

impl Key for Du {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("!")
			.lit("u")
			.atom(&self.us)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.us = d.lit("!").lit("u").atom();
	}
}

impl Display for Du {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}/!/u/{}", self.kv, self.ns, self.db, self.us)
	}
}
