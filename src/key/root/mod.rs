pub mod kv;
pub mod ns;
