#[macro_use]
extern crate tracing;

pub mod err;
pub mod fnc;
pub mod key;
pub mod sql;
