//! The error envelopes surfaced to HTTP clients
use serde::Serialize;

/// A client-facing error envelope keyed by HTTP status code.
///
/// The serialized form is part of the external contract and must not
/// change between releases.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Failure {
	pub code: u16,
	pub details: &'static str,
	pub description: &'static str,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub information: String,
}

impl Failure {
	/// Builds the envelope for a status code, attaching request-specific
	/// information. Unknown status codes are coerced to 500.
	pub fn new(code: u16, information: impl Into<String>) -> Self {
		let (code, details, description) = match code {
			200 => (
				200,
				"Information",
				"Visit the documentation for details on accessing the api.",
			),
			400 => (
				400,
				"Request problems detected",
				"There is a problem with your request. Ensure that the request is valid.",
			),
			401 => (
				401,
				"Authentication failed",
				"Your authentication details are invalid. Reauthenticate using a valid token.",
			),
			403 => (
				403,
				"Request resource forbidden",
				"Your request was forbidden. Perhaps you don't have the necessary permissions to access this resource.",
			),
			404 => (
				404,
				"Request resource not found",
				"The requested resource does not exist. Check that you have entered the url correctly.",
			),
			405 => (
				405,
				"This method is not allowed",
				"The requested http method is not allowed for this resource. Refer to the documentation for allowed methods.",
			),
			409 => (
				409,
				"Request conflict detected",
				"The request could not be processed because of a conflict in the request.",
			),
			413 => (
				413,
				"Request content length too large",
				"All requests to the database must not exceed the predefined content length.",
			),
			415 => (
				415,
				"Unsupported content type requested",
				"The request needs to adhere to certain constraints. Check your request settings and try again.",
			),
			422 => (
				422,
				"Request problems detected",
				"There is a problem with your request. The request appears to contain invalid data.",
			),
			426 => (
				426,
				"Upgrade required",
				"There is a problem with your request. The request is expected to upgrade to a websocket connection.",
			),
			501 => (
				501,
				"Not Implemented",
				"The server either does not recognize the request method, or it lacks the ability to fulfill the request.",
			),
			504 => (
				504,
				"Gateway Timeout",
				"The request to the server was restricted by a timeout duration, and did not manage to complete in time.",
			),
			_ => (
				500,
				"Internal server error",
				"There was a problem with our servers, and we have been notified.",
			),
		};
		Self {
			code,
			details,
			description,
			information: information.into(),
		}
	}
}

impl From<&crate::sql::Error> for Failure {
	/// Statement parsing problems surface as a 400
	fn from(err: &crate::sql::Error) -> Self {
		Failure::new(400, err.to_string())
	}
}
