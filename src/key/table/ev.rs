//! Stores an event definition on a table
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Ev {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub ev: Atom,
}

pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	ev: impl Into<Atom>,
) -> Ev {
	Ev::new(kv, ns, db, tb, ev)
}

impl Categorise for Ev {
	fn categorise(&self) -> Category {
		Category::TableEvent
	}
}

impl Ev {
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		ev: impl Into<Atom>,
	) -> Self {
		Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			ev: ev.into(),
		}
	}
}

impl Key for Ev {
	fn encode(&self) -> Vec<u8> {
		Encoder::new()
			.atom(&self.kv)
			.lit("*")
			.atom(&self.ns)
			.lit("*")
			.atom(&self.db)
			.lit("*")
			.atom(&self.tb)
			.lit("!")
			.lit("e")
			.atom(&self.ev)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.ev = d.lit("!").lit("e").atom();
	}
}

impl Display for Ev {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/*/{}/*/{}/*/{}/!/e/{}", self.kv, self.ns, self.db, self.tb, self.ev)
	}
}
