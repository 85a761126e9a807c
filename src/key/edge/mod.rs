//! Stores a graph edge between two records
use crate::key::category::{Categorise, Category};
use crate::key::dec::Decoder;
use crate::key::enc::Encoder;
use crate::key::{Atom, Key};
use std::fmt::{self, Display, Formatter};

/// The direction markers an edge key may carry.
const MARKERS: [&str; 5] = ["«»", "‹", "›", "«", "»"];

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Edge {
	pub kv: Atom,
	pub ns: Atom,
	pub db: Atom,
	pub tb: Atom,
	pub id: Atom,
	pub tk: Atom,
	pub tp: Atom,
	pub ft: Atom,
	pub fk: Atom,
}

#[allow(clippy::too_many_arguments)]
pub fn new(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
	tk: impl Into<Atom>,
	tp: impl Into<Atom>,
	ft: impl Into<Atom>,
	fk: impl Into<Atom>,
) -> Edge {
	Edge::new(kv, ns, db, tb, id, tk, tp, ft, fk)
}

/// The lower bound of a scan over every edge of a record
pub fn prefix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Edge::new(kv, ns, db, tb, id, Atom::Prefix, Atom::Ignore, Atom::Ignore, Atom::Ignore).encode()
}

/// The upper bound of a scan over every edge of a record
pub fn suffix(
	kv: impl Into<Atom>,
	ns: impl Into<Atom>,
	db: impl Into<Atom>,
	tb: impl Into<Atom>,
	id: impl Into<Atom>,
) -> Vec<u8> {
	Edge::new(kv, ns, db, tb, id, Atom::Suffix, Atom::Ignore, Atom::Ignore, Atom::Ignore).encode()
}

impl Categorise for Edge {
	fn categorise(&self) -> Category {
		Category::Edge
	}
}

impl Edge {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		kv: impl Into<Atom>,
		ns: impl Into<Atom>,
		db: impl Into<Atom>,
		tb: impl Into<Atom>,
		id: impl Into<Atom>,
		tk: impl Into<Atom>,
		tp: impl Into<Atom>,
		ft: impl Into<Atom>,
		fk: impl Into<Atom>,
	) -> Self {
		let mut key = Self {
			kv: kv.into(),
			ns: ns.into(),
			db: db.into(),
			tb: tb.into(),
			id: id.into(),
			tk: tk.into(),
			tp: tp.into(),
			ft: ft.into(),
			fk: fk.into(),
		};
		key.init();
		key
	}

	/// Any direction marker outside the listed set becomes `«»`.
	/// Sentinels pass through, serving as open range bounds.
	fn init(&mut self) {
		self.tk = self.dir();
	}

	fn dir(&self) -> Atom {
		match &self.tk {
			Atom::Strand(s) if MARKERS.contains(&s.as_str()) => self.tk.clone(),
			Atom::Ignore | Atom::Prefix | Atom::Suffix => self.tk.clone(),
			_ => Atom::from("«»"),
		}
	}
}

impl Key for Edge {
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
			.atom(&self.dir())
			.atom(&self.tp)
			.atom(&self.ft)
			.atom(&self.fk)
			.finish()
	}
	fn decode(&mut self, data: &[u8]) {
		let mut d = Decoder::new(data);
		self.kv = d.atom();
		self.ns = d.lit("*").atom();
		self.db = d.lit("*").atom();
		self.tb = d.lit("*").atom();
		self.id = d.lit("*").atom();
		self.tk = d.atom();
		self.tp = d.atom();
		self.ft = d.atom();
		self.fk = d.atom();
		self.init();
	}
}

impl Display for Edge {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"/{}/*/{}/*/{}/*/{}/*/{}/{}/{}/{}/{}",
			self.kv,
			self.ns,
			self.db,
			self.tb,
			self.id,
			self.dir(),
			self.tp,
			self.ft,
			self.fk
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::key::thing;

	#[test]
	fn key() {
		let val = Edge::new(
			"surreal",
			"abcum",
			"database",
			"person",
			"873c2f37-ea03-4c5e-843e-cf393af44155",
			"«»",
			"clicked",
			"link",
			"b38d7aa1-60d6-4f2d-8702-46bd0fa961fe",
		);
		let enc = val.encode();
		assert_eq!(
			enc,
			&b"\x07surreal\x00*\x07abcum\x00*\x07database\x00*\x07person\x00*\x07873c2f37-ea03-4c5e-843e-cf393af44155\x00\x07\xc2\xab\xc2\xbb\x00\x07clicked\x00\x07link\x00\x07b38d7aa1-60d6-4f2d-8702-46bd0fa961fe\x00"[..]
		);

		let mut dec = Edge::default();
		dec.decode(&enc);
		assert_eq!(dec, val);
		assert_eq!(
			val.to_string(),
			"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/«»/clicked/link/b38d7aa1-60d6-4f2d-8702-46bd0fa961fe"
		);
	}

	#[test]
	fn unknown_markers_are_normalized() {
		let one = Edge::new("kv", "ns", "db", "person", "a", "?", "likes", "post", "b");
		let two = Edge::new("kv", "ns", "db", "person", "a", "«»", "likes", "post", "b");
		assert_eq!(one.encode(), two.encode());
		assert_eq!(one.to_string(), two.to_string());

		for marker in super::MARKERS {
			let key = Edge::new("kv", "ns", "db", "person", "a", marker, "likes", "post", "b");
			assert_eq!(key.tk, Atom::from(marker));
		}
	}

	#[test]
	fn extends_the_record_key() {
		let record = thing::new("kv", "ns", "db", "person", "a").encode();
		let edge = Edge::new("kv", "ns", "db", "person", "a", "»", "likes", "post", "b").encode();
		assert!(edge.starts_with(&record));
	}

	#[test]
	fn bounds() {
		let beg = prefix("kv", "ns", "db", "person", "a");
		let end = suffix("kv", "ns", "db", "person", "a");
		for marker in super::MARKERS {
			let key = Edge::new("kv", "ns", "db", "person", "a", marker, "likes", "post", "b")
				.encode();
			assert!(beg < key && key < end);
		}
	}
}
