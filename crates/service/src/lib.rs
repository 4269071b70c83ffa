pub mod dog;
pub mod errors;
pub mod test_support;
