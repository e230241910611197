pub mod config;
pub mod error;
pub mod formatter;
pub mod group;
pub mod meta;
pub mod outcome;
pub mod registry;
pub mod report;
pub mod runner;
pub mod stamp;
pub mod test;

mod strategy;
pub use strategy::*;

#[cfg(test)]
mod test_support;
