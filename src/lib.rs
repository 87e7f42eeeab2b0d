pub mod args;
pub mod error;
pub mod executor;
pub mod query;
pub mod test_result;
pub mod test_runner;
