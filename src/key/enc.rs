use super::atom::Atom;
use super::{ARR, END, NEG, NIL, POS, PRE, STR, SUF, TME, VAL};
use chrono::{DateTime, Utc};

/// Writes key slots into an order-preserving byte buffer.
///
/// Literal separators are written raw. Typed slots are written as a type
/// tag, a self-delimiting payload, and an `END` terminator, such that the
/// lexicographic order of the output bytes follows the natural order of
/// the slot values.
pub(super) struct Encoder {
	buf: Vec<u8>,
}

impl Encoder {
	pub(super) fn new() -> Self {
		Self {
			buf: Vec::with_capacity(64),
		}
	}

	/// Appends a literal separator verbatim.
	pub(super) fn lit(mut self, part: &str) -> Self {
		self.buf.extend_from_slice(part.as_bytes());
		self
	}

	/// Appends one typed slot.
	pub(super) fn atom(mut self, atom: &Atom) -> Self {
		self.push(atom);
		self
	}

	pub(super) fn finish(self) -> Vec<u8> {
		self.buf
	}

	fn push(&mut self, atom: &Atom) {
		match atom {
			Atom::Ignore => return,
			Atom::Prefix => self.buf.push(PRE),
			Atom::Suffix => self.buf.push(SUF),
			Atom::Nil => self.buf.push(NIL),
			Atom::Bool(v) => {
				self.buf.push(VAL);
				self.buf.push(*v as u8);
			}
			Atom::Int(v) => self.number(*v as f64),
			Atom::Float(v) => self.number(*v),
			Atom::Time(v) => self.instant(v),
			Atom::Strand(v) => self.text(v),
			Atom::Array(v) => {
				self.buf.push(ARR);
				for item in v {
					self.push(item);
				}
			}
		}
		self.buf.push(END);
	}

	/// Numbers share a single `f64` image so that integers and floats
	/// interleave numerically under byte comparison. Values outside
	/// [`MIN_NUMBER`, `MAX_NUMBER`] lose precision.
	///
	/// [`MIN_NUMBER`]: super::MIN_NUMBER
	/// [`MAX_NUMBER`]: super::MAX_NUMBER
	fn number(&mut self, v: f64) {
		// -0.0 and 0.0 are the same key
		let v = if v == 0.0 {
			0.0
		} else {
			v
		};
		if v < 0.0 {
			self.buf.push(NEG);
			self.buf.extend_from_slice(&(!v.to_bits()).to_be_bytes());
		} else {
			self.buf.push(POS);
			self.buf.extend_from_slice(&v.to_bits().to_be_bytes());
		}
	}

	/// Timestamps keep full nanosecond precision, so they carry a true
	/// 64-bit offset rather than the shared number image.
	fn instant(&mut self, v: &DateTime<Utc>) {
		self.buf.push(TME);
		let ns = v.timestamp_nanos_opt().unwrap_or_default();
		if ns < 0 {
			self.buf.push(NEG);
			self.buf.extend_from_slice(&(!ns.unsigned_abs()).to_be_bytes());
		} else {
			self.buf.push(POS);
			self.buf.extend_from_slice(&(ns as u64).to_be_bytes());
		}
	}

	/// UTF-8 bytes with embedded `0x00` escaped as `0x00 0xFF`, keeping
	/// the lexicographic order of the unescaped strings.
	fn text(&mut self, v: &str) {
		self.buf.push(STR);
		for &b in v.as_bytes() {
			self.buf.push(b);
			if b == END {
				self.buf.push(0xff);
			}
		}
	}
}
