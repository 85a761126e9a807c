use super::atom::Atom;
use super::{ARR, END, MAX_NUMBER, MIN_NUMBER, NEG, NIL, POS, PRE, STR, SUF, TME, VAL};
use chrono::DateTime;

/// Reads key slots back out of an encoded byte buffer.
///
/// The decoder walks the same template the encoder wrote: literal
/// separators are skipped, typed slots are rebuilt. Truncated or
/// malformed input stops the cursor cleanly; any slot read after that
/// point is nil.
pub(super) struct Decoder<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Decoder<'a> {
	pub(super) fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	/// Skips a literal separator.
	pub(super) fn lit(&mut self, part: &str) -> &mut Self {
		if self.data[self.pos..].starts_with(part.as_bytes()) {
			self.pos += part.len();
		} else {
			self.halt();
		}
		self
	}

	/// Reads one typed slot.
	pub(super) fn atom(&mut self) -> Atom {
		let Some(tag) = self.next() else {
			return Atom::Nil;
		};
		let atom = match tag {
			PRE => Atom::Prefix,
			NIL => Atom::Nil,
			VAL => Atom::Bool(self.next() == Some(0x01)),
			TME => self.instant(),
			NEG | POS => self.number(tag),
			STR => self.text(),
			ARR => self.items(),
			SUF => Atom::Suffix,
			_ => {
				self.halt();
				Atom::Nil
			}
		};
		self.end();
		atom
	}

	fn next(&mut self) -> Option<u8> {
		let b = self.data.get(self.pos).copied();
		if b.is_some() {
			self.pos += 1;
		}
		b
	}

	fn peek(&self, ahead: usize) -> Option<u8> {
		self.data.get(self.pos + ahead).copied()
	}

	fn take8(&mut self) -> Option<u64> {
		let bytes = self.data.get(self.pos..self.pos + 8)?;
		self.pos += 8;
		Some(u64::from_be_bytes(bytes.try_into().unwrap_or_default()))
	}

	fn halt(&mut self) {
		self.pos = self.data.len();
	}

	/// Consumes the terminator of the atom just read.
	fn end(&mut self) {
		match self.next() {
			Some(END) | None => (),
			Some(_) => self.halt(),
		}
	}

	fn number(&mut self, tag: u8) -> Atom {
		let Some(raw) = self.take8() else {
			return Atom::Nil;
		};
		let val = match tag {
			NEG => f64::from_bits(!raw),
			_ => f64::from_bits(raw),
		};
		// Integral values within the exact range come back as integers
		if val.fract() == 0.0 && (MIN_NUMBER as f64..=MAX_NUMBER as f64).contains(&val) {
			Atom::Int(val as i64)
		} else {
			Atom::Float(val)
		}
	}

	fn instant(&mut self) -> Atom {
		let tag = self.next();
		let Some(raw) = self.take8() else {
			return Atom::Nil;
		};
		let ns = match tag {
			Some(NEG) => (!raw as i64).wrapping_neg(),
			_ => raw as i64,
		};
		Atom::Time(DateTime::from_timestamp_nanos(ns))
	}

	fn text(&mut self) -> Atom {
		let mut buf = Vec::new();
		loop {
			match self.peek(0) {
				None => break,
				Some(END) => {
					if self.peek(1) == Some(0xff) {
						buf.push(END);
						self.pos += 2;
					} else {
						break;
					}
				}
				Some(b) => {
					buf.push(b);
					self.pos += 1;
				}
			}
		}
		Atom::Strand(String::from_utf8_lossy(&buf).into_owned())
	}

	fn items(&mut self) -> Atom {
		let mut items = Vec::new();
		loop {
			match self.peek(0) {
				None | Some(END) => break,
				Some(_) => items.push(self.atom()),
			}
		}
		Atom::Array(items)
	}
}
