//! Execution engines.
//!
//! An engine takes the ordered groups of a run together with the engine
//! configuration of a runner and executes them. It owns everything about
//! how examples run: filtering, panic handling, timing and driving the
//! configured formatters. The caller only gets the aggregated
//! [`RunReport`] back.
//!
//! Engines receive the configuration explicitly, so the same engine value can
//! serve several runners without sharing state between them.
//!
//! Implement [`ExecutionEngine`] to substitute the way groups are executed,
//! for example to record which groups a runner dispatched.

use crate::{config::EngineConfig, group::ExampleGroup, report::RunReport};

mod default;
pub use default::*;

pub trait ExecutionEngine {
    type Error;

    /// Run `groups` in the given order.
    ///
    /// Failing examples are part of the returned report. `Err` is reserved
    /// for problems with the run itself, such as an unusable configuration.
    fn run(
        &self,
        groups: &[ExampleGroup],
        config: &mut EngineConfig,
    ) -> Result<RunReport, Self::Error>;
}

impl<E: ExecutionEngine + ?Sized> ExecutionEngine for &E {
    type Error = E::Error;

    fn run(
        &self,
        groups: &[ExampleGroup],
        config: &mut EngineConfig,
    ) -> Result<RunReport, Self::Error> {
        (**self).run(groups, config)
    }
}
