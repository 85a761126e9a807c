use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Display, Formatter};

/// A single typed value stored in a key slot.
///
/// Every typed slot of every key shape holds an `Atom`. The encoded type
/// tags fix the order of the kinds on disk, so that two keys differing
/// only in one slot compare by the natural order of the values in that
/// slot: `Prefix < nil < false < true < timestamps < numbers < strings <
/// arrays < Suffix`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Atom {
	/// Excludes the slot from the encoded key entirely.
	Ignore,
	/// Sorts before every concrete value in a slot.
	Prefix,
	/// Sorts after every concrete value in a slot.
	Suffix,
	/// A null value.
	Nil,
	Bool(bool),
	Int(i64),
	Float(f64),
	Time(DateTime<Utc>),
	Strand(String),
	Array(Vec<Atom>),
}

impl Default for Atom {
	fn default() -> Self {
		Self::Nil
	}
}

impl PartialEq for Atom {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Ignore, Self::Ignore) => true,
			(Self::Prefix, Self::Prefix) => true,
			(Self::Suffix, Self::Suffix) => true,
			(Self::Nil, Self::Nil) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Int(a), Self::Int(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			// Numbers pass through a single numeric image on disk, so an
			// integral float and its integer form are the same key.
			(Self::Int(a), Self::Float(b)) => *a as f64 == *b,
			(Self::Float(a), Self::Int(b)) => *a == *b as f64,
			(Self::Time(a), Self::Time(b)) => a == b,
			(Self::Strand(a), Self::Strand(b)) => a == b,
			(Self::Array(a), Self::Array(b)) => a == b,
			_ => false,
		}
	}
}

impl From<bool> for Atom {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

macro_rules! from_prim_ints {
	($($int: ty),*) => {
		$(
			impl From<$int> for Atom {
				fn from(v: $int) -> Self {
					Self::Int(v as i64)
				}
			}
		)*
	};
}

from_prim_ints!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<f32> for Atom {
	fn from(v: f32) -> Self {
		Self::Float(v as f64)
	}
}

impl From<f64> for Atom {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<&str> for Atom {
	fn from(v: &str) -> Self {
		Self::Strand(v.to_owned())
	}
}

impl From<String> for Atom {
	fn from(v: String) -> Self {
		Self::Strand(v)
	}
}

impl From<DateTime<Utc>> for Atom {
	fn from(v: DateTime<Utc>) -> Self {
		Self::Time(v)
	}
}

impl From<Vec<Atom>> for Atom {
	fn from(v: Vec<Atom>) -> Self {
		Self::Array(v)
	}
}

impl From<Vec<&str>> for Atom {
	fn from(v: Vec<&str>) -> Self {
		Self::Array(v.into_iter().map(Atom::from).collect())
	}
}

impl From<Vec<String>> for Atom {
	fn from(v: Vec<String>) -> Self {
		Self::Array(v.into_iter().map(Atom::from).collect())
	}
}

impl Display for Atom {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Ignore => Ok(()),
			Self::Prefix => f.write_str("\u{1}"),
			Self::Suffix => f.write_str("\u{ff}"),
			Self::Nil => f.write_str("<nil>"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Time(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
			Self::Strand(v) => f.write_str(v),
			Self::Array(v) => {
				f.write_str("[")?;
				for (i, a) in v.iter().enumerate() {
					if i > 0 {
						f.write_str(" ")?;
					}
					write!(f, "{a}")?;
				}
				f.write_str("]")
			}
		}
	}
}
