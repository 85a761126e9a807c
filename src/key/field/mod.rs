//! Stores the value of a single field of a record
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Field {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub id: Atom,
	pub fd: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
	fd: impl Into<Atom>,
) -> Field {
	Field::new(kv, ns, db, tb, id, fd)
}

/// The lower bound of a scan over every field of a record
pub fn prefix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Field::new(kv, ns, db, tb, id, Atom::Prefix).encode()
}

/// The upper bound of a scan over every field of a record
pub fn suffix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Field::new(kv, ns, db, tb, id, Atom::Suffix).encode()
}

impl Categorise for Field {
	fn categorise(&self) -> Category {
		Category::RecordField
	}
}

impl Field {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		id: impl Into<Atom>,
		fd: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			id: id.into(),
			fd: fd.into(),
		}
	}
}

impl Key for Field {
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
			.lit("*")
			.atom(&self.fd)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.id = d.lit("*").atom();
		self.fd = d.lit("*").atom();
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"/{}/*/{}/*/{}/*/{}/*/{}/*/{}",
			self.kv, self.ns, self.db, self.tb, self.id, self.fd
		)
	}
}
