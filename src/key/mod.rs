//! How the keys are structured in the key value store
///
/// crate::key::root::kv                 /{kv}
/// crate::key::root::ns                 /{kv}!n{ns}
///
/// crate::key::namespace::all           /{kv}*{ns}
/// crate::key::namespace::db            /{kv}*{ns}!d{db}
/// crate::key::namespace::tk            /{kv}*{ns}!k{tk}
/// crate::key::namespace::us            /{kv}*{ns}!u{us}
///
/// crate::key::database::all            /{kv}*{ns}*{db}
/// crate::key::database::sc             /{kv}*{ns}*{db}!s{sc}
/// crate::key::database::tb             /{kv}*{ns}*{db}!t{tb}
/// crate::key::database::tk             /{kv}*{ns}*{db}!k{tk}
/// crate::key::database::us             /{kv}*{ns}*{db}!u{us}
///
/// crate::key::scope::tk                /{kv}*{ns}*{db}!st{sc}!k{tk}
///
/// crate::key::table::all               /{kv}*{ns}*{db}*{tb}
/// crate::key::table::ev                /{kv}*{ns}*{db}*{tb}!e{ev}
/// crate::key::table::fd                /{kv}*{ns}*{db}*{tb}!f{fd}
/// crate::key::table::ft                /{kv}*{ns}*{db}*{tb}!t{ft}
/// crate::key::table::ix                /{kv}*{ns}*{db}*{tb}!i{ix}
/// crate::key::table::lv                /{kv}*{ns}*{db}*{tb}!l{lv}
///
/// crate::key::thing                    /{kv}*{ns}*{db}*{tb}*{id}
/// crate::key::field                    /{kv}*{ns}*{db}*{tb}*{id}*{fd}
/// crate::key::edge                     /{kv}*{ns}*{db}*{tb}*{id}{tk}{tp}{ft}{fk}
///
/// crate::key::patch                    /{kv}*{ns}*{db}*{tb}~{id}{at}
///
/// crate::key::index                    /{kv}*{ns}*{db}*{tb}¤{ix}{fd}
/// crate::key::point                    /{kv}*{ns}*{db}*{tb}¤{ix}{fd}{id}
///
pub mod category;
pub mod database;
pub mod debug;
pub mod edge;
pub mod field;
pub mod index;
pub mod namespace;
pub mod patch;
pub mod point;
pub mod root;
pub mod scope;
pub mod table;
pub mod thing;

mod atom;
mod dec;
mod enc;

pub use self::atom::Atom;

use std::fmt::Display;

/// The minimum number which can be accurately serialized
pub const MIN_NUMBER: i64 = -(1 << 53);
/// The maximum number which can be accurately serialized
pub const MAX_NUMBER: i64 = (1 << 53) - 1;

// Type tags of the atom encoding. The tag byte leads each typed slot,
// so the relative values fix the order of the atom kinds on disk.
pub(crate) const END: u8 = 0x00;
pub(crate) const PRE: u8 = 0x01;
pub(crate) const NIL: u8 = 0x02;
pub(crate) const VAL: u8 = 0x03;
pub(crate) const TME: u8 = 0x04;
pub(crate) const NEG: u8 = 0x05;
pub(crate) const POS: u8 = 0x06;
pub(crate) const STR: u8 = 0x07;
pub(crate) const ARR: u8 = 0x08;
pub(crate) const SUF: u8 = 0x09;

/// The capability every key shape exposes.
///
/// Higher layers hold keys through this trait only. Copying is provided
/// by `Clone` on the concrete shapes.
pub trait Key: Display {
	/// Encodes the key into binary
	fn encode(&self) -> Vec<u8>;
	/// Decodes the key from binary
	fn decode(&mut self, data: &[u8]);
}

#[cfg(test)]
mod tests {
	use super::debug::sprint;
	use super::*;
	use chrono::{DateTime, TimeZone, Utc};
	use std::fmt;

	fn clock() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(1987, 6, 22, 8, 0, 0).unwrap()
			+ chrono::Duration::nanoseconds(123456789)
	}

	fn fd(items: Vec<Atom>) -> Atom {
		Atom::Array(items)
	}

	/// One entry per catalogue shape, in encoded byte order, with the
	/// canonical string form alongside.
	fn catalogue() -> Vec<(&'static str, Box<dyn Key>)> {
		const ID: &str = "873c2f37-ea03-4c5e-843e-cf393af44155";
		const FK: &str = "b38d7aa1-60d6-4f2d-8702-46bd0fa961fe";
		vec![
			(
				"/surreal",
				Box::new(root::kv::Kv::new("surreal")),
			),
			(
				"/surreal/!/n/abcum",
				Box::new(root::ns::Ns::new("surreal", "abcum")),
			),
			(
				"/surreal/*/abcum",
				Box::new(namespace::all::Namespace::new("surreal", "abcum")),
			),
			(
				"/surreal/*/abcum/!/d/database",
				Box::new(namespace::db::Db::new("surreal", "abcum", "database")),
			),
			(
				"/surreal/*/abcum/!/k/default",
				Box::new(namespace::tk::Nt::new("surreal", "abcum", "default")),
			),
			(
				"/surreal/*/abcum/!/u/info@abcum.com",
				Box::new(namespace::us::Nu::new("surreal", "abcum", "info@abcum.com")),
			),
			(
				"/surreal/*/abcum/*/database",
				Box::new(database::all::Database::new("surreal", "abcum", "database")),
			),
			(
				"/surreal/*/abcum/*/database/!/k/default",
				Box::new(database::tk::Dt::new("surreal", "abcum", "database", "default")),
			),
			(
				"/surreal/*/abcum/*/database/!/s/admin",
				Box::new(database::sc::Sc::new("surreal", "abcum", "database", "admin")),
			),
			(
				"/surreal/*/abcum/*/database/!/st/admin/!/k/default",
				Box::new(scope::tk::St::new("surreal", "abcum", "database", "admin", "default")),
			),
			(
				"/surreal/*/abcum/*/database/!/t/person",
				Box::new(database::tb::Tb::new("surreal", "abcum", "database", "person")),
			),
			(
				"/surreal/*/abcum/*/database/!/u/info@abcum.com",
				Box::new(database::us::Du::new("surreal", "abcum", "database", "info@abcum.com")),
			),
			(
				"/surreal/*/abcum/*/database/*/person",
				Box::new(table::all::Table::new("surreal", "abcum", "database", "person")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/!/e/trigger",
				Box::new(table::ev::Ev::new("surreal", "abcum", "database", "person", "trigger")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/!/f/fullname",
				Box::new(table::fd::Fd::new("surreal", "abcum", "database", "person", "fullname")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/!/i/teenagers",
				Box::new(table::ix::Ix::new("surreal", "abcum", "database", "person", "teenagers")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/!/l/realtime",
				Box::new(table::lv::Lv::new("surreal", "abcum", "database", "person", "realtime")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/!/t/foreign",
				Box::new(table::ft::Ft::new("surreal", "abcum", "database", "person", "foreign")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/\u{1}",
				Box::new(thing::Thing::new("surreal", "abcum", "database", "person", Atom::Prefix)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155",
				Box::new(thing::Thing::new("surreal", "abcum", "database", "person", ID)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/«/clicked/link/b38d7aa1-60d6-4f2d-8702-46bd0fa961fe",
				Box::new(edge::Edge::new(
					"surreal", "abcum", "database", "person", ID, "«", "clicked", "link", FK,
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/«»/clicked/link/b38d7aa1-60d6-4f2d-8702-46bd0fa961fe",
				Box::new(edge::Edge::new(
					"surreal", "abcum", "database", "person", ID, "«»", "clicked", "link", FK,
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/»/clicked/link/b38d7aa1-60d6-4f2d-8702-46bd0fa961fe",
				Box::new(edge::Edge::new(
					"surreal", "abcum", "database", "person", ID, "»", "clicked", "link", FK,
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/*/name.first",
				Box::new(field::Field::new("surreal", "abcum", "database", "person", ID, "name.first")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/873c2f37-ea03-4c5e-843e-cf393af44155/*/name.last",
				Box::new(field::Field::new("surreal", "abcum", "database", "person", ID, "name.last")),
			),
			(
				"/surreal/*/abcum/*/database/*/person/*/\u{ff}",
				Box::new(thing::Thing::new("surreal", "abcum", "database", "person", Atom::Suffix)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/~/873c2f37-ea03-4c5e-843e-cf393af44155/1987-06-22T08:00:00.123456789Z",
				Box::new(patch::Patch::new("surreal", "abcum", "database", "person", ID, clock())),
			),
			(
				"/surreal/*/abcum/*/database/*/person/~/test/1987-06-22T08:00:00.123456789Z",
				Box::new(patch::Patch::new("surreal", "abcum", "database", "person", "test", clock())),
			),
			(
				"/surreal/*/abcum/*/database/*/person/¤/names/[false account:1 lastname <nil> firstname]",
				Box::new(index::Index::new(
					"surreal",
					"abcum",
					"database",
					"person",
					"names",
					fd(vec![
						Atom::from(false),
						Atom::from("account:1"),
						Atom::from("lastname"),
						Atom::Nil,
						Atom::from("firstname"),
					]),
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/¤/names/[lastname firstname]",
				Box::new(index::Index::new(
					"surreal",
					"abcum",
					"database",
					"person",
					"names",
					Atom::from(vec!["lastname", "firstname"]),
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/¤/names/[lastname firstname]/873c2f37-ea03-4c5e-843e-cf393af44155",
				Box::new(point::Point::new(
					"surreal",
					"abcum",
					"database",
					"person",
					"names",
					Atom::from(vec!["lastname", "firstname"]),
					ID,
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/¤/uniqs/[false account:1 lastname <nil> firstname]/873c2f37-ea03-4c5e-843e-cf393af44155",
				Box::new(point::Point::new(
					"surreal",
					"abcum",
					"database",
					"person",
					"uniqs",
					fd(vec![
						Atom::from(false),
						Atom::from("account:1"),
						Atom::from("lastname"),
						Atom::Nil,
						Atom::from("firstname"),
					]),
					ID,
				)),
			),
			(
				"/surreal/*/abcum/*/database/*/person/¤/uniqs/[lastname firstname]/873c2f37-ea03-4c5e-843e-cf393af44155",
				Box::new(point::Point::new(
					"surreal",
					"abcum",
					"database",
					"person",
					"uniqs",
					Atom::from(vec!["lastname", "firstname"]),
					ID,
				)),
			),
		]
	}

	#[test]
	fn displaying() {
		for (text, key) in catalogue() {
			assert_eq!(key.to_string(), text);
		}
	}

	#[test]
	fn encoding_orders_the_catalogue() {
		let keys = catalogue();
		for pair in keys.windows(2) {
			let one = pair[0].1.encode();
			let two = pair[1].1.encode();
			assert!(
				one < two,
				"{} should sort before {}\n{}\n{}",
				pair[0].0,
				pair[1].0,
				sprint(&one),
				sprint(&two),
			);
		}
	}

	#[test]
	fn typed_slots_sort_by_value() {
		let thing = |id: Atom| -> Box<dyn Key> {
			Box::new(thing::Thing::new("kv", "ns", "db", "person", id))
		};
		let index = |fd: Atom| -> Box<dyn Key> {
			Box::new(index::Index::new("kv", "ns", "db", "person", "names", fd))
		};
		let names = |fields: Vec<Atom>| index(Atom::Array(fields));
		let keys: Vec<Box<dyn Key>> = vec![
			Box::new(table::all::Table::new("kv", "ns", "db", "person")),
			thing(Atom::Prefix),
			thing(Atom::Nil),
			thing(Atom::from(false)),
			thing(Atom::from(true)),
			thing(Atom::from(clock() - chrono::Duration::days(1))),
			thing(Atom::from(clock())),
			thing(Atom::from(-9223372036854775807i64)),
			thing(Atom::from(-2147483647)),
			thing(Atom::from(-32767)),
			thing(Atom::from(-12)),
			thing(Atom::from(-1.5)),
			thing(Atom::from(-1)),
			thing(Atom::from(0)),
			thing(Atom::from(1)),
			thing(Atom::from(1.5)),
			thing(Atom::from(2)),
			thing(Atom::from(12)),
			thing(Atom::from(127)),
			thing(Atom::from(32767)),
			thing(Atom::from(2147483647)),
			thing(Atom::from(MAX_NUMBER)),
			thing(Atom::from("A")),
			thing(Atom::from("B")),
			thing(Atom::from("Bb")),
			thing(Atom::from("C")),
			thing(Atom::from("a")),
			thing(Atom::from("b")),
			thing(Atom::from("bB")),
			thing(Atom::from("c")),
			Box::new(edge::Edge::new(
				"kv", "ns", "db", "person", "test1", "", "friend", "", 2,
			)),
			Box::new(edge::Edge::new(
				"kv", "ns", "db", "person", "test1", "", "friend", "", 3,
			)),
			Box::new(edge::Edge::new(
				"kv", "ns", "db", "person", "test2", "", "friend", "", 1,
			)),
			thing(Atom::from("z")),
			thing(Atom::from("Â")),
			thing(Atom::from("Ä")),
			thing(Atom::from("ß")),
			thing(Atom::from("â")),
			thing(Atom::from("ä")),
			thing(Atom::from("①")),
			thing(Atom::from("会")),
			thing(Atom::from("😀😀😀")),
			thing(Atom::Suffix),
			Box::new(patch::Patch::new("kv", "ns", "db", "person", 1, clock())),
			Box::new(patch::Patch::new(
				"kv",
				"ns",
				"db",
				"person",
				1,
				clock() + chrono::Duration::seconds(1),
			)),
			index(Atom::Prefix),
			names(vec![
				Atom::from("account:abcum"),
				Atom::from(false),
				Atom::from("Smith"),
				Atom::Nil,
				Atom::from("Zoe"),
			]),
			names(vec![
				Atom::from("account:abcum"),
				Atom::from(true),
				Atom::from("Morgan Hitchcock"),
				Atom::Nil,
				Atom::from("Tobie"),
			]),
			names(vec![
				Atom::from("account:abcum"),
				Atom::from(true),
				Atom::from("Rutherford"),
				Atom::Nil,
				Atom::from("Sam"),
			]),
			names(vec![
				Atom::from("account:tests"),
				Atom::from(false),
				Atom::from("Smith"),
				Atom::Nil,
				Atom::from("Zoe"),
			]),
			names(vec![
				Atom::from("account:tests"),
				Atom::from(true),
				Atom::from("Morgan Hitchcock"),
				Atom::Nil,
				Atom::from("Tobie"),
			]),
			names(vec![Atom::from("account:zymba"), Atom::from(0), Atom::from(127)]),
			names(vec![Atom::from("account:zymba"), Atom::from(1), Atom::from(127)]),
			names(vec![Atom::from("account:zymba"), Atom::from(2), Atom::from(32767)]),
			names(vec![Atom::from("account:zymba"), Atom::from(2), Atom::from(2147483647)]),
			names(vec![Atom::from("account:zymba"), Atom::from(2), Atom::from(MAX_NUMBER)]),
			index(Atom::Suffix),
		];
		for pair in keys.windows(2) {
			let one = pair[0].encode();
			let two = pair[1].encode();
			assert!(
				one < two,
				"{} should sort before {}\n{}\n{}",
				pair[0],
				pair[1],
				sprint(&one),
				sprint(&two),
			);
		}
	}

	fn prefixed(parent: &dyn Key, child: &dyn Key) -> bool {
		child.encode().starts_with(&parent.encode())
	}

	#[test]
	fn prefixing() {
		let cases: Vec<(Box<dyn Key>, Vec<Box<dyn Key>>, Vec<Box<dyn Key>>)> = vec![
			(
				Box::new(namespace::all::Namespace::new("kv", "ns")),
				vec![
					Box::new(thing::Thing::new("kv", "ns", "other", "person", "test")),
					Box::new(table::all::Table::new("kv", "ns", "db", "person")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Prefix)),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", "test")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Suffix)),
					Box::new(patch::Patch::new("kv", "ns", "db", "person", "test", clock())),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["1", "2"]),
					)),
					Box::new(point::Point::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["3", "4"]),
						"test",
					)),
				],
				vec![
					Box::new(thing::Thing::new("kv", "other", "db", "person", "test")),
					Box::new(thing::Thing::new("other", "ns", "db", "person", "test")),
				],
			),
			(
				Box::new(database::all::Database::new("kv", "ns", "db")),
				vec![
					Box::new(table::all::Table::new("kv", "ns", "db", "person")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Prefix)),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", "test")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Suffix)),
					Box::new(patch::Patch::new("kv", "ns", "db", "person", "test", clock())),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["1", "2"]),
					)),
				],
				vec![
					Box::new(thing::Thing::new("kv", "ns", "other", "person", "test")),
					Box::new(thing::Thing::new("kv", "other", "db", "person", "test")),
					Box::new(thing::Thing::new("other", "ns", "db", "person", "test")),
				],
			),
			(
				Box::new(table::all::Table::new("kv", "ns", "db", "person")),
				vec![
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Prefix)),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", "test")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Suffix)),
					Box::new(patch::Patch::new("kv", "ns", "db", "person", "test", clock())),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["1", "2"]),
					)),
				],
				vec![
					Box::new(thing::Thing::new("kv", "ns", "db", "other", "test")),
					Box::new(thing::Thing::new("kv", "ns", "other", "person", "test")),
					Box::new(thing::Thing::new("kv", "other", "db", "person", "test")),
					Box::new(thing::Thing::new("other", "ns", "db", "person", "test")),
				],
			),
			(
				Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Ignore)),
				vec![
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Prefix)),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", "test")),
					Box::new(thing::Thing::new("kv", "ns", "db", "person", Atom::Suffix)),
				],
				vec![
					Box::new(patch::Patch::new("kv", "ns", "db", "person", "test", clock())),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["1", "2"]),
					)),
					Box::new(thing::Thing::new("kv", "ns", "db", "other", "test")),
					Box::new(thing::Thing::new("kv", "ns", "other", "person", "test")),
					Box::new(thing::Thing::new("kv", "other", "db", "person", "test")),
					Box::new(thing::Thing::new("other", "ns", "db", "person", "test")),
				],
			),
			(
				Box::new(index::Index::new("kv", "ns", "db", "person", "names", Atom::Ignore)),
				vec![
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["1", "2"]),
					)),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"names",
						Atom::from(vec!["3", "4"]),
					)),
				],
				vec![
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"person",
						"other",
						Atom::Array(Vec::new()),
					)),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"db",
						"other",
						"names",
						Atom::Array(Vec::new()),
					)),
					Box::new(index::Index::new(
						"kv",
						"ns",
						"other",
						"person",
						"names",
						Atom::Array(Vec::new()),
					)),
					Box::new(index::Index::new(
						"kv",
						"other",
						"db",
						"person",
						"names",
						Atom::Array(Vec::new()),
					)),
					Box::new(index::Index::new(
						"other",
						"ns",
						"db",
						"person",
						"names",
						Atom::Array(Vec::new()),
					)),
				],
			),
		];
		for (parent, yes, nos) in cases {
			for key in &yes {
				assert!(
					prefixed(parent.as_ref(), key.as_ref()),
					"{parent} should prefix {key}",
				);
			}
			for key in &nos {
				assert!(
					!prefixed(parent.as_ref(), key.as_ref()),
					"{parent} should not prefix {key}",
				);
			}
		}
	}

	/// A key shape carrying one slot of every atom kind, checking that a
	/// full template survives the encode and decode round trip.
	#[derive(Clone, Debug, Default, PartialEq)]
	struct Full {
		n: Atom,
		b: Atom,
		f: Atom,
		s: Atom,
		t: Atom,
		ni: Atom,
		i: Atom,
		nf: Atom,
		fl: Atom,
		ab: Atom,
		rs: Atom,
		at: Atom,
		ai: Atom,
		af: Atom,
		ain: Atom,
	}

	impl Key for Full {
		fn encode(&self) -> Vec<u8> {
			enc::Encoder::new()
				.atom(&self.n)
				.atom(&self.b)
				.atom(&self.f)
				.atom(&self.s)
				.atom(&self.t)
				.atom(&self.ni)
				.atom(&self.i)
				.atom(&self.nf)
				.atom(&self.fl)
				.atom(&self.ab)
				.atom(&self.rs)
				.atom(&self.at)
				.atom(&self.ai)
				.atom(&self.af)
				.atom(&self.ain)
				.finish()
		}
		fn decode(&mut self, data: &[u8]) {
			let mut d = dec::Decoder::new(data);
			self.n = d.atom();
			self.b = d.atom();
			self.f = d.atom();
			self.s = d.atom();
			self.t = d.atom();
			self.ni = d.atom();
			self.i = d.atom();
			self.nf = d.atom();
			self.fl = d.atom();
			self.ab = d.atom();
			self.rs = d.atom();
			self.at = d.atom();
			self.ai = d.atom();
			self.af = d.atom();
			self.ain = d.atom();
		}
	}

	impl fmt::Display for Full {
		fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
			write!(f, "/{}/{}/{}/{}", self.n, self.b, self.s, self.ain)
		}
	}

	#[test]
	fn full_roundtrip() {
		let val = Full {
			n: Atom::Nil,
			b: Atom::from(true),
			f: Atom::from(false),
			s: Atom::from("Test"),
			t: Atom::from(clock()),
			ni: Atom::from(MIN_NUMBER),
			i: Atom::from(1),
			nf: Atom::from(-f64::MAX),
			fl: Atom::from(f64::MAX),
			ab: Atom::from(vec![Atom::from(true), Atom::from(false)]),
			rs: Atom::from(vec!["A", "B", "C"]),
			at: Atom::from(vec![Atom::from(clock()), Atom::from(clock())]),
			ai: Atom::from(vec![Atom::from(1), Atom::from(MAX_NUMBER)]),
			af: Atom::from(vec![Atom::from(1.1), Atom::from(1.2), Atom::from(1.3)]),
			ain: Atom::from(vec![
				Atom::from(true),
				Atom::from(false),
				Atom::Nil,
				Atom::from("Test"),
				Atom::from(clock()),
				Atom::from(192),
				Atom::from(1.1),
				Atom::from(vec!["Test"]),
			]),
		};
		let enc = val.encode();
		let mut dec = Full::default();
		dec.decode(&enc);
		assert_eq!(dec, val, "{}", sprint(&enc));
	}

	#[test]
	fn copying() {
		let val = thing::Thing::new("kv", "ns", "db", "person", "test");
		let mut copy = val.clone();
		assert_eq!(copy, val);
		copy.id = Atom::from("other");
		assert_ne!(copy, val);
	}

	#[test]
	fn categorising() {
		use super::category::Categorise;
		let key = thing::Thing::new("kv", "ns", "db", "person", "test");
		assert_eq!(key.categorise().to_string(), "Thing");
		let key = edge::Edge::new("kv", "ns", "db", "person", "a", "»", "likes", "post", "b");
		assert_eq!(key.categorise().to_string(), "Edge");
	}
}
