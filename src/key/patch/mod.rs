//! Stores a timestamped change to a record
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Patch {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub id: Atom,
	pub at: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
	at: impl Into<Atom>,
) -> Patch {
	Patch::new(kv, ns, db, tb, id, at)
}

/// The lower bound of a scan over every change to a record
pub fn prefix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Patch::new(kv, ns, db, tb, id, Atom::Prefix).encode()
}

/// The upper bound of a scan over every change to a record
pub fn suffix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Patch::new(kv, ns, db, tb, id, Atom::Suffix).encode()
}

impl Categorise for Patch {
	fn categorise(&self) -> Category {
		Category::Patch
	}
}

impl Patch {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		id: impl Into<Atom>,
		at: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			id: id.into(),
			at: at.into(),
		}
	}
}

impl Key for Patch {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("*")
			.atom(&self.tb)
			.lit("~")
			.atom(&self.id)
			.atom(&self.at)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.id = d.lit("~").atom();
		self.at = d.atom();
	}
}

impl Display for Patch {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"/{}/*/{}/*/{}/*/{}/~/{}/{}",
			self.kv, self.ns, self.db, self.tb, self.id, self.at
		)
	}
}
