use super::error::Error;
use super::parser::Parser;
use super::token::Token;

/// The entity kinds a DEFINE or REMOVE statement may address.
pub(super) const ENTITIES: &[Token] = &[
	Token::Namespace,
	Token::Database,
	Token::Login,
	Token::Token,
	Token::Scope,
	Token::Table,
	Token::Event,
	Token::Field,
	Token::Index,
];

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DefineStatement {
	Namespace(DefineNamespaceStatement),
	Database(DefineDatabaseStatement),
	Login(DefineLoginStatement),
	Token(DefineTokenStatement),
	Scope(DefineScopeStatement),
	Table(DefineTableStatement),
	Event(DefineEventStatement),
	Field(DefineFieldStatement),
	Index(DefineIndexStatement),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineNamespaceStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineDatabaseStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineLoginStatement {
	pub user: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineTokenStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineScopeStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineTableStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineEventStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineFieldStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefineIndexStatement {
	pub name: String,
}

impl Parser {
	/// Parses the remainder of a DEFINE statement.
	pub fn parse_define_statement(&mut self) -> Result<DefineStatement, Error> {
		// Inspect the next token.
		let (tok, _) = self.should_be(ENTITIES)?;
		debug!("parsing DEFINE {tok} statement");
		match tok {
			Token::Namespace => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Namespace(DefineNamespaceStatement {
					name,
				}))
			}
			Token::Database => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Database(DefineDatabaseStatement {
					name,
				}))
			}
			Token::Login => {
				let user = self.parse_name()?;
				Ok(DefineStatement::Login(DefineLoginStatement {
					user,
				}))
			}
			Token::Token => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Token(DefineTokenStatement {
					name,
				}))
			}
			Token::Scope => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Scope(DefineScopeStatement {
					name,
				}))
			}
			Token::Table => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Table(DefineTableStatement {
					name,
				}))
			}
			Token::Event => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Event(DefineEventStatement {
					name,
				}))
			}
			Token::Field => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Field(DefineFieldStatement {
					name,
				}))
			}
			_ => {
				let name = self.parse_name()?;
				Ok(DefineStatement::Index(DefineIndexStatement {
					name,
				}))
			}
		}
	}

	/// The defined entity name follows the entity keyword.
	pub(super) fn parse_name(&mut self) -> Result<String, Error> {
		let (_, name) = self.should_be(&[Token::Ident, Token::String])?;
		Ok(name)
	}
}
