//! Stores the root of all keys under a database
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Database {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, db: impl Into<Atom>) -> Database {
	Database::new(kv, ns, db)
}

impl Categorise for Database {
	fn categorise(&self) -> Category {
		Category::DatabaseRoot
	}
}

impl Database {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, db: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
		}
	}
}

impl Key for Database {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
	}
}

impl Display for Database {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}", self.kv, self.ns, self.db)
	}
}
