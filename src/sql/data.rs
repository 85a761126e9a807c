use super::error::Error;
use super::parser::{Parser, LITERALS};
use super::token::Token;
use super::value::Value;

/// The change set of a statement writing record data.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Data {
	Set(DataExpression),
	Diff(DiffExpression),
	Merge(MergeExpression),
	Content(ContentExpression),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataExpression {
	pub data: Vec<ItemExpression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemExpression {
	pub lhs: Value,
	pub op: Token,
	pub rhs: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiffExpression {
	pub data: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MergeExpression {
	pub data: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentExpression {
	pub data: Value,
}

fn json_expected(err: Error) -> Error {
	match err {
		Error::Parse {
			found,
			..
		} => Error::Parse {
			found,
			expected: vec!["json"],
		},
		err => err,
	}
}

impl Parser {
	/// Parses an optional SET, DIFF, MERGE, or CONTENT clause.
	pub fn parse_data(&mut self) -> Result<Option<Data>, Error> {
		if let Some((tok, _)) =
			self.might_be(&[Token::Set, Token::Diff, Token::Merge, Token::Content])
		{
			trace!("parsing {tok} data clause");
			let exp = match tok {
				Token::Set => Data::Set(self.parse_set()?),
				Token::Diff => Data::Diff(self.parse_diff()?),
				Token::Merge => Data::Merge(self.parse_merge()?),
				_ => Data::Content(self.parse_content()?),
			};
			return Ok(Some(exp));
		}
		Ok(None)
	}

	fn parse_set(&mut self) -> Result<DataExpression, Error> {
		let mut out = DataExpression::default();
		loop {
			// The first part of a SET expression must
			// always be an identifier, specifying a
			// record field to set.
			let (tok, lit) =
				self.should_be(&[Token::Ident, Token::Expr]).map_err(|err| match err {
					Error::Parse {
						found,
						..
					} => Error::Parse {
						found,
						expected: vec!["field name"],
					},
					err => err,
				})?;
			let lhs = self.declare(tok, &lit)?;
			// The next query part must be a =, +=, or
			// -= operator, as this is a SET expression
			// and not a binary expression.
			let (op, _) = self.should_be(&[Token::Eq, Token::Inc, Token::Dec])?;
			// The next query part can be any literal
			// value, so handle accordingly.
			let (tok, lit) = self.should_be(LITERALS)?;
			let rhs = self.declare(tok, &lit)?;
			// Append the single SET data expression to
			// the array of data expressions.
			out.data.push(ItemExpression {
				lhs,
				op,
				rhs,
			});
			// Check to see if the next token is a comma
			// and if not, then break out of the loop,
			// otherwise repeat until we find no comma.
			if self.might_be(&[Token::Comma]).is_none() {
				break;
			}
		}
		Ok(out)
	}

	fn parse_diff(&mut self) -> Result<DiffExpression, Error> {
		let (tok, lit) = self.should_be(&[Token::Array, Token::Param]).map_err(json_expected)?;
		match self.declare(tok, &lit) {
			Ok(data) => Ok(DiffExpression {
				data,
			}),
			Err(_) => Err(Error::Parse {
				found: lit,
				expected: vec!["json"],
			}),
		}
	}

	fn parse_merge(&mut self) -> Result<MergeExpression, Error> {
		let (tok, lit) = self.should_be(&[Token::Json, Token::Param]).map_err(json_expected)?;
		match self.declare(tok, &lit) {
			Ok(data) => Ok(MergeExpression {
				data,
			}),
			Err(_) => Err(Error::Parse {
				found: lit,
				expected: vec!["json"],
			}),
		}
	}

	fn parse_content(&mut self) -> Result<ContentExpression, Error> {
		let (tok, lit) = self.should_be(&[Token::Json, Token::Param]).map_err(json_expected)?;
		match self.declare(tok, &lit) {
			Ok(data) => Ok(ContentExpression {
				data,
			}),
			Err(_) => Err(Error::Parse {
				found: lit,
				expected: vec!["json"],
			}),
		}
	}
}
