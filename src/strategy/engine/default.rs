use std::{
    io::{self, Write},
    panic, thread,
    time::Instant,
};

use crossbeam_channel::Sender;

use crate::{
    config::{EngineConfig, FormatterSpec},
    engine::ExecutionEngine,
    error::EngineError,
    filter::{ExampleFilter, NoFilter},
    formatter::{self, *},
    group::ExampleGroup,
    outcome::{ExampleOutcome, ExampleStatus},
    panic::{DefaultPanicHandler, ExamplePanicHandler},
    report::{ExampleRecord, FormatError, RunReport},
    test::Example,
};

/// Formatter events buffered between the run and the formatter thread.
const FORMAT_QUEUE: usize = 16;

/// The engine used by [`Runner::run`](crate::runner::Runner::run).
///
/// Groups run in the given order, depth first, examples of a group before
/// its sub-groups. Examples run one after another on the calling thread.
/// Formatters are driven from a separate thread, so slow output does not
/// hold up execution.
#[derive(Debug, Default, Clone)]
pub struct DefaultEngine<Filter = NoFilter, PanicHandler = DefaultPanicHandler> {
    filter: Filter,
    panic_handler: PanicHandler,
}

impl DefaultEngine {
    pub fn new() -> Self {
        Self {
            filter: NoFilter::new(),
            panic_handler: DefaultPanicHandler,
        }
    }
}

impl<Filter, PanicHandler> DefaultEngine<Filter, PanicHandler> {
    pub fn with_filter<WithFilter: ExampleFilter>(
        self,
        filter: WithFilter,
    ) -> DefaultEngine<WithFilter, PanicHandler> {
        DefaultEngine {
            filter,
            panic_handler: self.panic_handler,
        }
    }

    pub fn with_panic_handler<WithPanicHandler: ExamplePanicHandler>(
        self,
        panic_handler: WithPanicHandler,
    ) -> DefaultEngine<Filter, WithPanicHandler> {
        DefaultEngine {
            filter: self.filter,
            panic_handler,
        }
    }
}

enum FmtEvent<'t> {
    GroupStart(FmtGroupStart<'t>),
    ExampleOutcome(FmtExampleOutcome<'t>),
    GroupEnd(FmtGroupEnd<'t>),
}

/// A resolved formatter, either created for this run from its name or
/// borrowed from the configuration.
enum ActiveFormatter<'c> {
    Owned(BoxedFormatter),
    Borrowed(&'c mut BoxedFormatter),
}

impl ActiveFormatter<'_> {
    fn get(&mut self) -> &mut dyn Formatter {
        match self {
            ActiveFormatter::Owned(formatter) => &mut **formatter,
            ActiveFormatter::Borrowed(formatter) => &mut ***formatter,
        }
    }
}

fn resolve_formatters(
    formatters: &mut [FormatterSpec],
) -> Result<Vec<ActiveFormatter<'_>>, EngineError> {
    formatters
        .iter_mut()
        .map(|spec| match spec {
            FormatterSpec::Named(name) => formatter::by_name(name)
                .map(ActiveFormatter::Owned)
                .ok_or_else(|| EngineError::UnknownFormatter(name.clone())),
            FormatterSpec::Custom(formatter) => Ok(ActiveFormatter::Borrowed(formatter)),
        })
        .collect()
}

/// Call one hook on every formatter, collecting write errors.
fn dispatch(
    formatters: &mut [ActiveFormatter<'_>],
    fmt_errors: &mut Vec<FormatError>,
    hook: &'static str,
    mut call: impl FnMut(&mut dyn Formatter) -> io::Result<()>,
) {
    for formatter in formatters {
        let formatter = formatter.get();
        if let Err(error) = call(&mut *formatter) {
            fmt_errors.push(FormatError {
                formatter: formatter.name().to_string(),
                hook,
                error,
            });
        }
    }
}

/// Example counts of a group and its whole subtree.
#[derive(Debug, Default, Clone, Copy)]
struct GroupCount {
    active: usize,
    filtered: usize,
    /// Groups in the subtree, the group itself included.
    groups: usize,
}

fn full_description(path: &[&str], description: &str) -> String {
    path.iter()
        .copied()
        .chain([description])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl<Filter: ExampleFilter, PanicHandler: ExamplePanicHandler> DefaultEngine<Filter, PanicHandler> {
    /// Count the examples of a group tree.
    ///
    /// Pushes one entry per group onto `counts` in the order [`Self::run_group`]
    /// visits them and returns the entry of `group` itself.
    fn count<'t>(
        &self,
        group: &'t ExampleGroup,
        path: &mut Vec<&'t str>,
        counts: &mut Vec<GroupCount>,
    ) -> GroupCount {
        let index = counts.len();
        counts.push(GroupCount::default());
        path.push(group.description());

        let mut total = GroupCount {
            groups: 1,
            ..GroupCount::default()
        };
        for example in group.examples() {
            match self
                .filter
                .includes(&full_description(path, &example.description), example)
            {
                true => total.active += 1,
                false => total.filtered += 1,
            }
        }
        for child in group.children() {
            let child = self.count(child, path, counts);
            total.active += child.active;
            total.filtered += child.filtered;
            total.groups += child.groups;
        }

        path.pop();
        counts[index] = total;
        total
    }

    fn run_example(&self, example: &Example) -> ExampleOutcome {
        let now = Instant::now();
        let status = match example.pending.is_pending() {
            true => ExampleStatus::from(&example.pending),
            false => self.panic_handler.handle(|| example.call(), example),
        };
        ExampleOutcome {
            status,
            duration: now.elapsed(),
        }
    }

    /// Run a group tree, consuming its entries from `counts`.
    fn run_group<'t>(
        &self,
        group: &'t ExampleGroup,
        path: &mut Vec<&'t str>,
        depth: usize,
        counts: &mut &[GroupCount],
        ftx: &Sender<FmtEvent<'t>>,
        records: &mut Vec<ExampleRecord>,
    ) {
        let remaining = *counts;
        let Some(count) = remaining.first() else {
            return;
        };
        if count.active == 0 {
            *counts = remaining.get(count.groups..).unwrap_or_default();
            return;
        }
        *counts = &remaining[1..];

        let _ = ftx.send(FmtEvent::GroupStart(FmtGroupStart { group, depth }));
        path.push(group.description());

        for example in group.examples() {
            let full_description = full_description(path, &example.description);
            if !self.filter.includes(&full_description, example) {
                continue;
            }

            let outcome = self.run_example(example);
            tracing::trace!(
                example = %full_description,
                status = outcome.status.label(),
                "example finished"
            );
            records.push(ExampleRecord {
                description: example.description.to_string(),
                full_description: full_description.clone(),
                id: example.metadata.id().map(String::from),
                group_title: example.metadata.group_title().map(String::from),
                metadata: example.metadata.clone(),
                outcome: outcome.clone(),
            });
            let _ = ftx.send(FmtEvent::ExampleOutcome(FmtExampleOutcome {
                example: &example.meta,
                full_description,
                depth,
                outcome,
            }));
        }

        for child in group.children() {
            self.run_group(child, path, depth + 1, counts, ftx, records);
        }

        path.pop();
        let _ = ftx.send(FmtEvent::GroupEnd(FmtGroupEnd { group, depth }));
    }
}

impl<Filter, PanicHandler> ExecutionEngine for DefaultEngine<Filter, PanicHandler>
where
    Filter: ExampleFilter,
    PanicHandler: ExamplePanicHandler,
{
    type Error = EngineError;

    fn run(
        &self,
        groups: &[ExampleGroup],
        config: &mut EngineConfig,
    ) -> Result<RunReport, Self::Error> {
        let now = Instant::now();
        let color = config.use_color();
        let EngineConfig {
            formatters,
            output,
            error,
            ..
        } = config;

        let mut active_formatters = resolve_formatters(formatters)?;
        let mut fmt_errors = Vec::new();

        let mut counts = Vec::new();
        let (examples, filtered_out) = groups
            .iter()
            .map(|group| self.count(group, &mut Vec::new(), &mut counts))
            .fold((0, 0), |acc, count| (acc.0 + count.active, acc.1 + count.filtered));
        tracing::debug!(groups = groups.len(), examples, filtered_out, "starting run");

        let run_start = FmtRunStart {
            examples,
            filtered_out,
            color,
        };
        dispatch(&mut active_formatters, &mut fmt_errors, "fmt_run_start", |f| {
            f.fmt_run_start(&mut *output, &run_start)
        });

        let mut records = Vec::with_capacity(examples);
        let (mut active_formatters, mut fmt_errors) = thread::scope(|scope| {
            let (ftx, frx) = crossbeam_channel::bounded(FORMAT_QUEUE);
            let output = &mut *output;
            let fmt_thread = scope.spawn(move || {
                while let Ok(event) = frx.recv() {
                    match &event {
                        FmtEvent::GroupStart(data) => dispatch(
                            &mut active_formatters,
                            &mut fmt_errors,
                            "fmt_group_start",
                            |f| f.fmt_group_start(&mut *output, data),
                        ),
                        FmtEvent::ExampleOutcome(data) => dispatch(
                            &mut active_formatters,
                            &mut fmt_errors,
                            "fmt_example_outcome",
                            |f| f.fmt_example_outcome(&mut *output, data),
                        ),
                        FmtEvent::GroupEnd(data) => dispatch(
                            &mut active_formatters,
                            &mut fmt_errors,
                            "fmt_group_end",
                            |f| f.fmt_group_end(&mut *output, data),
                        ),
                    }
                }
                (active_formatters, fmt_errors)
            });

            let mut remaining = counts.as_slice();
            for group in groups {
                self.run_group(group, &mut Vec::new(), 0, &mut remaining, &ftx, &mut records);
            }

            drop(ftx);
            fmt_thread
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload))
        });

        let duration = now.elapsed();
        let run_outcomes = FmtRunOutcomes {
            records: &records,
            filtered_out,
            duration,
        };
        dispatch(&mut active_formatters, &mut fmt_errors, "fmt_run_outcomes", |f| {
            f.fmt_run_outcomes(&mut *output, &run_outcomes)
        });
        drop(active_formatters);

        if let Err(err) = output.flush() {
            let _ = writeln!(error, "failed to flush output stream: {err}");
        }
        for fmt_error in fmt_errors.iter() {
            let _ = writeln!(
                error,
                "formatter `{}` failed in {}: {}",
                fmt_error.formatter, fmt_error.hook, fmt_error.error
            );
        }

        let report = RunReport {
            records,
            filtered_out,
            duration,
            fmt_errors,
        };
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            pending = report.pending(),
            filtered_out,
            duration = ?report.duration,
            "run finished"
        );
        Ok(report)
    }
}
