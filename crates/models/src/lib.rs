pub mod db;
pub mod dog;
pub mod errors;
