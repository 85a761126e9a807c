use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	#[error("Found `{found}` but expected `{}`", .expected.join(", "))]
	Parse {
		found: String,
		expected: Vec<&'static str>,
	},
	#[error("Invalid number: {0}")]
	Number(String),
	#[error("Invalid duration: {0}")]
	Duration(String),
	#[error("Invalid datetime: {0}")]
	Datetime(String),
	#[error("Invalid JSON: {0}")]
	Json(String),
}
