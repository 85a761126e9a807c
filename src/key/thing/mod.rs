//! Stores a record within a table
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Thing {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub id: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Thing {
	Thing::new(kv, ns, db, tb, id)
}

/// The lower bound of a scan over every record in a table
pub fn prefix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
) -> Vec<u8> {
	Thing::new(kv, ns, db, tb, Atom::Prefix).encode()
}

/// The upper bound of a scan over every record in a table
pub fn suffix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
) -> Vec<u8> {
	Thing::new(kv, ns, db, tb, Atom::Suffix).encode()
}

impl Categorise for Thing {
	fn categorise(&self) -> Category {
		Category::Thing
	}
}

impl Thing {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		id: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			id: id.into(),
		}
	}
}

impl Key for Thing {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("*")
			.atom(&self.tb)
			.lit("*")
			.atom(&self.id)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.id = d.lit("*").atom();
	}
}

impl Display for Thing {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}/*/{}/*/{}", self.kv, self.ns, self.db, self.tb, self.id)
	}
}
