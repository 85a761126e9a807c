//! Stores a database definition under a namespace
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Db {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
}

pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, db: impl Into<Atom>) -> Db {
	Db::new(kv, ns, db)
}

impl Categorise for Db {
	fn categorise(&self) -> Category {
		Category::Database
	}
}

impl Db {
	pub fn new(kv: impl Into<Atom>, ns: impl Into<Atom>, db: impl Into<Atom>) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
		}
	}
}

impl Key for Db {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("!")
			.lit("d")
			.atom(&self.db)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("!").lit("d").atom();
	}
}

impl Display for Db {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/!/d/{}", self.kv, self.ns, self.db)
	}
}
