use super::define::ENTITIES;
use super::error::Error;
use super::parser::Parser;
use super::token::Token;

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RemoveStatement {
	Namespace(RemoveNamespaceStatement),
	Database(RemoveDatabaseStatement),
	Login(RemoveLoginStatement),
	Token(RemoveTokenStatement),
	Scope(RemoveScopeStatement),
	Table(RemoveTableStatement),
	Event(RemoveEventStatement),
	Field(RemoveFieldStatement),
	Index(RemoveIndexStatement),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveNamespaceStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveDatabaseStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveLoginStatement {
	pub user: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveTokenStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveScopeStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveTableStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveEventStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveFieldStatement {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveIndexStatement {
	pub name: String,
}

impl Parser {
	/// Parses the remainder of a REMOVE statement.
	pub fn parse_remove_statement(&mut self) -> Result<RemoveStatement, Error> {
		// Inspect the next token.
		let (tok, _) = self.should_be(ENTITIES)?;
		debug!("parsing REMOVE {tok} statement");
		match tok {
			Token::Namespace => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Namespace(RemoveNamespaceStatement {
					name,
				}))
			}
			Token::Database => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Database(RemoveDatabaseStatement {
					name,
				}))
			}
			Token::Login => {
				let user = self.parse_name()?;
				Ok(RemoveStatement::Login(RemoveLoginStatement {
					user,
				}))
			}
			Token::Token => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Token(RemoveTokenStatement {
					name,
				}))
			}
			Token::Scope => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Scope(RemoveScopeStatement {
					name,
				}))
			}
			Token::Table => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Table(RemoveTableStatement {
					name,
				}))
			}
			Token::Event => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Event(RemoveEventStatement {
					name,
				}))
			}
			Token::Field => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Field(RemoveFieldStatement {
					name,
				}))
			}
			_ => {
				let name = self.parse_name()?;
				Ok(RemoveStatement::Index(RemoveIndexStatement {
					name,
				}))
			}
		}
	}
}
