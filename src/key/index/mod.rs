//! Stores an index directory keyed by a tuple of field values
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Index {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub ix: Atom,
	pub fd: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	ix: impl Into<Atom>,
	fd: impl Into<Atom>,
) -> Index {
	Index::new(kv, ns, db, tb, ix, fd)
}

/// The lower bound of a scan over every entry of an index
pub fn prefix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	ix: impl Into<Atom>,
) -> Vec<u8> {
	Index::new(kv, ns, db, tb, ix, Atom::Prefix).encode()
}

/// The upper bound of a scan over every entry of an index
pub fn suffix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	ix: impl Into<Atom>,
) -> Vec<u8> {
	Index::new(kv, ns, db, tb, ix, Atom::Suffix).encode()
}

impl Categorise for Index {
	fn categorise(&self) -> Category {
		Category::Index
	}
}

impl Index {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		ix: impl Into<Atom>,
		fd: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			ix: ix.into(),
			fd: fd.into(),
		}
	}
}

impl Key for Index {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("*")
			.atom(&self.tb)
			.lit("¤")
			.atom(&self.ix)
			.atom(&self.fd)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.ix = d.lit("¤").atom();
		self.fd = d.atom();
	}
}

impl Display for Index {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"/{}/*/{}/*/{}/*/{}/¤/{}/{}",
			self.kv, self.ns, self.db, self.tb, self.ix, self.fd
		)
	}
}
