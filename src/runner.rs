//! The runner façade.
//!
//! A [`Runner`] ties the pieces together: it owns a [`Registry`] and an
//! [`EngineConfig`], builds groups, stamps them with the id of the check they
//! implement and hands the registered groups to an execution engine.
//!
//! ```
//! use ctltest::{
//!     config::{OutputStream, RunConfig},
//!     runner::Runner,
//! };
//!
//! let mut runner = Runner::new(RunConfig::new().with_format("json"));
//! runner.set_output_stream(OutputStream::custom(std::io::sink()));
//!
//! let group = runner.example_group("sample", |g| {
//!     g.example("adds", || assert_eq!(1 + 1, 2));
//! });
//! runner.add_test(group, "ctl-001", Some("Sample control"));
//!
//! let report = runner.run().unwrap();
//! assert_eq!(report.exit_code(), 0);
//! assert_eq!(report.records[0].id.as_deref(), Some("ctl-001"));
//! ```
//!
//! Registered groups stay registered for the lifetime of a runner, so calling
//! [`Runner::run`] again runs the same groups again. For an independent run,
//! construct a new runner.

use std::borrow::Cow;

use crate::{
    config::{EngineConfig, FormatterSpec, OutputStream, RunConfig},
    engine::{DefaultEngine, ExecutionEngine},
    error::EngineError,
    group::{ExampleGroup, GroupBuilder, example_group},
    registry::Registry,
    report::RunReport,
    stamp::{stamp_id, stamp_title},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// Constructed, not run yet.
    Configured,
    /// Ran at least once.
    Ran,
}

/// Registers groups tagged with external ids and runs them.
///
/// A runner is driven from one thread. Its configuration is its own, two
/// runners in one process do not share formatters or streams.
#[derive(Debug)]
pub struct Runner {
    conf: RunConfig,
    tests: Registry,
    engine_config: EngineConfig,
    state: RunnerState,
}

impl Runner {
    pub fn new(conf: RunConfig) -> Self {
        let mut runner = Self {
            engine_config: EngineConfig::new(),
            tests: Registry::new(),
            conf,
            state: RunnerState::Configured,
        };
        runner.reset_tests();
        runner.configure_output();
        runner
    }

    pub fn config(&self) -> &RunConfig {
        &self.conf
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine_config
    }

    pub fn engine_config_mut(&mut self) -> &mut EngineConfig {
        &mut self.engine_config
    }

    /// Attach another formatter, by built-in name or as an instance.
    pub fn add_formatter(&mut self, formatter: impl Into<FormatterSpec>) {
        self.engine_config.add_formatter(formatter);
    }

    /// Redirect formatter output. Pass [`OutputStream::custom`] for any
    /// writer other than stdout or stderr.
    pub fn set_output_stream(&mut self, stream: impl Into<OutputStream>) {
        self.engine_config.set_output_stream(stream);
    }

    pub fn set_error_stream(&mut self, stream: impl Into<OutputStream>) {
        self.engine_config.set_error_stream(stream);
    }

    /// Build a new group. Nothing is registered until [`Runner::add_test`].
    pub fn example_group<F>(&self, description: impl Into<Cow<'static, str>>, body: F) -> ExampleGroup
    where
        F: FnOnce(&mut GroupBuilder),
    {
        example_group(description, body)
    }

    /// Stamp `group` with the id (and title, if given) of the check it
    /// implements and register it.
    pub fn add_test(&mut self, mut group: ExampleGroup, rule_id: &str, title: Option<&str>) {
        stamp_id(&mut group, rule_id);
        if let Some(title) = title {
            stamp_title(&mut group, title);
        }
        self.tests.register(group);
    }

    /// The registered groups, in registration order.
    pub fn tests(&self) -> &[ExampleGroup] {
        self.tests.ordered_groups()
    }

    /// Run all registered groups with the [`DefaultEngine`].
    pub fn run(&mut self) -> Result<RunReport, EngineError> {
        self.run_with(DefaultEngine::new())
    }

    /// Run all registered groups with the given engine.
    pub fn run_with<E: ExecutionEngine>(&mut self, engine: E) -> Result<RunReport, E::Error> {
        let report = engine.run(self.tests.ordered_groups(), &mut self.engine_config);
        self.state = RunnerState::Ran;
        report
    }

    /// Empty the registry and drop run scoped engine state.
    fn reset_tests(&mut self) {
        self.tests.reset();
        self.engine_config.reset();
        self.engine_config.set_color_setting(self.conf.color);
    }

    fn configure_output(&mut self) {
        self.engine_config.configure_output(self.conf.format.as_deref());
    }
}
