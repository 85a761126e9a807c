//! Stores an index entry pointing at a record
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Point {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub ix: Atom,
	pub fd: Atom,
	pub id: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	ix: impl Into<Atom>,
	fd: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Point {
	Point::new(kv, ns, db, tb, ix, fd, id)
}

impl Categorise for Point {
	fn categorise(&self) -> Category {
		Category::IndexPoint
	}
}

impl Point {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		ix: impl Into<Atom>,
		fd: impl Into<Atom>,
		id: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			ix: ix.into(),
			fd: fd.into(),
			id: id.into(),
		}
	}
}

impl Key for Point {
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
			.atom(&self.id)
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
		self.id = d.atom();
	}
}

impl Display for Point {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"/{}/*/{}/*/{}/*/{}/¤/{}/{}/{}",
			self.kv, self.ns, self.db, self.tb, self.ix, self.fd, self.id
		)
	}
}
