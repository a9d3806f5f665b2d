pub mod crypto;
pub mod db;
pub mod tokens;
