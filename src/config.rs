//! Run and engine configuration.
//!
//! [`RunConfig`] holds the settings a [`Runner`](crate::runner::Runner) is
//! constructed with and never changes afterwards. [`EngineConfig`] is what an
//! execution engine reads when it runs: the formatters to drive and the
//! streams to write to. It is owned by a single runner, so two runners in the
//! same process never see each other's formatters or streams.

use std::{
    collections::BTreeMap,
    fmt::Debug,
    io::{self, IsTerminal},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    formatter::{BoxedFormatter, DEFAULT_FORMATTER, Formatter, common::color::ColorSetting},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Name of the formatter to attach, `progress` when unset.
    pub format: Option<String>,
    pub color: ColorSetting,
    /// Settings this crate does not interpret itself.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_format(self, format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
            ..self
        }
    }

    pub fn with_color_setting(self, color: ColorSetting) -> Self {
        Self { color, ..self }
    }

    /// Look up a setting by key, including `format` and `color`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        match key {
            "format" => self.format.clone().map(serde_json::Value::from),
            "color" => serde_json::to_value(self.color).ok(),
            key => self.extra.get(key).cloned(),
        }
    }
}

/// A formatter to attach, either by built-in name or as an instance.
///
/// Names are not checked when added. An execution engine resolves them when
/// a run starts and rejects names it does not know.
pub enum FormatterSpec {
    Named(String),
    Custom(BoxedFormatter),
}

impl FormatterSpec {
    pub fn name(&self) -> &str {
        match self {
            FormatterSpec::Named(name) => name,
            FormatterSpec::Custom(formatter) => formatter.name(),
        }
    }
}

impl Debug for FormatterSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(formatter) => f.debug_tuple("Custom").field(&formatter.name()).finish(),
        }
    }
}

impl From<&str> for FormatterSpec {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<String> for FormatterSpec {
    fn from(value: String) -> Self {
        Self::Named(value)
    }
}

impl<F: Formatter + Send + 'static> From<Box<F>> for FormatterSpec {
    fn from(value: Box<F>) -> Self {
        Self::Custom(value)
    }
}

impl From<BoxedFormatter> for FormatterSpec {
    fn from(value: BoxedFormatter) -> Self {
        Self::Custom(value)
    }
}

/// A writable sink for formatter output or errors.
pub enum OutputStream {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Custom(Box<dyn io::Write + Send>),
}

impl OutputStream {
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::Stderr(io::stderr())
    }

    pub fn custom(w: impl io::Write + Send + 'static) -> Self {
        Self::Custom(Box::new(w))
    }

    /// Custom streams are never treated as terminals.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stdout(stdout) => stdout.is_terminal(),
            Self::Stderr(stderr) => stderr.is_terminal(),
            Self::Custom(_) => false,
        }
    }
}

impl From<io::Stdout> for OutputStream {
    fn from(value: io::Stdout) -> Self {
        Self::Stdout(value)
    }
}

impl From<io::Stderr> for OutputStream {
    fn from(value: io::Stderr) -> Self {
        Self::Stderr(value)
    }
}

impl Debug for OutputStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout(_) => write!(f, "Stdout"),
            Self::Stderr(_) => write!(f, "Stderr"),
            Self::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

impl io::Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::Stderr(w) => w.write(buf),
            Self::Custom(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Custom(w) => w.flush(),
        }
    }
}

#[derive(Debug)]
pub struct EngineConfig {
    pub(crate) formatters: Vec<FormatterSpec>,
    pub(crate) output: OutputStream,
    pub(crate) error: OutputStream,
    pub(crate) color: ColorSetting,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            formatters: Vec::new(),
            output: OutputStream::stdout(),
            error: OutputStream::stderr(),
            color: ColorSetting::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the formatter named `format`, or `progress` if none is given.
    pub fn configure_output(&mut self, format: Option<&str>) {
        self.add_formatter(format.unwrap_or(DEFAULT_FORMATTER));
    }

    pub fn add_formatter(&mut self, formatter: impl Into<FormatterSpec>) {
        let formatter = formatter.into();
        tracing::debug!(formatter = formatter.name(), "adding formatter");
        self.formatters.push(formatter);
    }

    pub fn set_output_stream(&mut self, stream: impl Into<OutputStream>) {
        self.output = stream.into();
    }

    pub fn set_error_stream(&mut self, stream: impl Into<OutputStream>) {
        self.error = stream.into();
    }

    pub fn set_color_setting(&mut self, color: ColorSetting) {
        self.color = color;
    }

    pub fn color_setting(&self) -> ColorSetting {
        self.color
    }

    /// Names of the attached formatters, in the order they were added.
    pub fn formatter_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.formatters.iter().map(FormatterSpec::name)
    }

    /// Whether formatters should write colored output.
    pub fn use_color(&self) -> bool {
        self.color.use_color(self.output.is_terminal())
    }

    /// Detach all formatters and restore the standard streams.
    pub fn reset(&mut self) {
        tracing::debug!(formatters = self.formatters.len(), "resetting engine configuration");
        *self = Self {
            color: self.color,
            ..Self::default()
        };
    }
}
