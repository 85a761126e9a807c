use super::error::Error;
use super::token::Token;
use super::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;

/// The token kinds which may stand on their own as a literal value.
pub(super) const LITERALS: &[Token] = &[
	Token::Ident,
	Token::Expr,
	Token::Param,
	Token::Regex,
	Token::String,
	Token::Region,
	Token::Number,
	Token::Double,
	Token::Date,
	Token::Time,
	Token::Duration,
	Token::Array,
	Token::Json,
	Token::Table,
	Token::True,
	Token::False,
	Token::Null,
	Token::Void,
	Token::Missing,
	Token::Empty,
	Token::Mul,
	Token::Qmark,
];

/// A cursor over the token stream emitted by the SQL lexer.
pub struct Parser {
	tokens: Vec<(Token, String)>,
	pos: usize,
}

impl Parser {
	pub fn new(tokens: Vec<(Token, String)>) -> Self {
		Self {
			tokens,
			pos: 0,
		}
	}

	fn next(&mut self) -> (Token, String) {
		match self.tokens.get(self.pos) {
			Some((tok, lit)) => {
				self.pos += 1;
				(*tok, lit.clone())
			}
			None => (Token::Eof, String::new()),
		}
	}

	/// Consumes the next token if it is one of the given kinds.
	pub(crate) fn might_be(&mut self, tokens: &[Token]) -> Option<(Token, String)> {
		let mark = self.pos;
		let (tok, lit) = self.next();
		if tokens.contains(&tok) {
			Some((tok, lit))
		} else {
			self.pos = mark;
			None
		}
	}

	/// Consumes the next token, which must be one of the given kinds.
	pub(crate) fn should_be(&mut self, tokens: &[Token]) -> Result<(Token, String), Error> {
		let mark = self.pos;
		let (tok, lit) = self.next();
		if tokens.contains(&tok) {
			Ok((tok, lit))
		} else {
			self.pos = mark;
			Err(Error::Parse {
				found: lit,
				expected: tokens.iter().map(|t| t.as_str()).collect(),
			})
		}
	}

	/// Converts a literal token into its value.
	pub(crate) fn declare(&self, tok: Token, lit: &str) -> Result<Value, Error> {
		match tok {
			Token::True => Ok(Value::Bool(true)),
			Token::False => Ok(Value::Bool(false)),
			Token::Mul => Ok(Value::All),
			Token::Qmark => Ok(Value::Any),
			Token::Null => Ok(Value::Null),
			Token::Void | Token::Missing => Ok(Value::Void),
			Token::Empty => Ok(Value::Empty),
			Token::Expr | Token::Ident => Ok(Value::Ident(lit.to_owned())),
			Token::Table => Ok(Value::Table(lit.to_owned())),
			Token::Param => Ok(Value::Param(lit.to_owned())),
			Token::Regex => Ok(Value::Regex(lit.to_owned())),
			Token::String | Token::Region => Ok(Value::Strand(lit.to_owned())),
			Token::Date => {
				let date = NaiveDate::parse_from_str(lit, "%Y-%m-%d")
					.ok()
					.and_then(|d| d.and_hms_opt(0, 0, 0))
					.ok_or_else(|| Error::Datetime(lit.to_owned()))?;
				Ok(Value::Datetime(date.and_utc()))
			}
			Token::Time => DateTime::parse_from_rfc3339(lit)
				.map(|t| Value::Datetime(t.with_timezone(&Utc)))
				.map_err(|_| Error::Datetime(lit.to_owned())),
			Token::Number | Token::Double => lit
				.parse::<f64>()
				.map(Value::Number)
				.map_err(|_| Error::Number(lit.to_owned())),
			Token::Duration => duration(lit).map(Value::Duration),
			Token::Array => {
				let json: Vec<serde_json::Value> =
					serde_json::from_str(lit).map_err(|_| Error::Json(lit.to_owned()))?;
				Ok(Value::Array(json.into_iter().map(Value::from).collect()))
			}
			Token::Json => {
				let json: serde_json::Map<String, serde_json::Value> =
					serde_json::from_str(lit).map_err(|_| Error::Json(lit.to_owned()))?;
				Ok(Value::Object(json.into_iter().map(|(k, v)| (k, v.into())).collect()))
			}
			_ => Ok(Value::Strand(lit.to_owned())),
		}
	}
}

/// Parses a duration literal such as `1h30m`, `2d`, or `1w`, resolving
/// the day and week suffixes to hours.
fn duration(lit: &str) -> Result<Duration, Error> {
	let err = || Error::Duration(lit.to_owned());
	let mut out = Duration::ZERO;
	let mut rest = lit;
	if rest.is_empty() {
		return Err(err());
	}
	while !rest.is_empty() {
		let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
		if digits == 0 {
			return Err(err());
		}
		let (num, tail) = rest.split_at(digits);
		let value: u64 = num.parse().map_err(|_| err())?;
		let secs = |unit: u64| value.checked_mul(unit).map(Duration::from_secs).ok_or_else(err);
		let (part, next) = if let Some(t) = tail.strip_prefix("ns") {
			(Duration::from_nanos(value), t)
		} else if let Some(t) = tail.strip_prefix("µs").or_else(|| tail.strip_prefix("us")) {
			(Duration::from_micros(value), t)
		} else if let Some(t) = tail.strip_prefix("ms") {
			(Duration::from_millis(value), t)
		} else if let Some(t) = tail.strip_prefix('s') {
			(Duration::from_secs(value), t)
		} else if let Some(t) = tail.strip_prefix('m') {
			(secs(60)?, t)
		} else if let Some(t) = tail.strip_prefix('h') {
			(secs(3600)?, t)
		} else if let Some(t) = tail.strip_prefix('d') {
			(secs(24 * 3600)?, t)
		} else if let Some(t) = tail.strip_prefix('w') {
			(secs(168 * 3600)?, t)
		} else {
			return Err(err());
		};
		out = out.checked_add(part).ok_or_else(err)?;
		rest = next;
	}
	Ok(out)
}
