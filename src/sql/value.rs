use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

/// A literal value produced by token conversion.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
	Null,
	Void,
	Empty,
	All,
	Any,
	Bool(bool),
	Number(f64),
	Strand(String),
	Datetime(DateTime<Utc>),
	Duration(Duration),
	Array(Vec<Value>),
	Object(BTreeMap<String, Value>),
	Ident(String),
	Table(String),
	Param(String),
	Regex(String),
}

impl From<serde_json::Value> for Value {
	fn from(v: serde_json::Value) -> Self {
		match v {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(v),
			serde_json::Value::Number(v) => Value::Number(v.as_f64().unwrap_or_default()),
			serde_json::Value::String(v) => Value::Strand(v),
			serde_json::Value::Array(v) => Value::Array(v.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(v) => {
				Value::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
			}
		}
	}
}
