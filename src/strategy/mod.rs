pub mod engine;
pub mod filter;
pub mod panic;
