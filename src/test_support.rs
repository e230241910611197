use std::{
    io,
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::{
    group::{ExampleGroup, example_group},
    report::RunReport,
};

/// A group with two passing examples per level and `depth` levels of
/// nesting below it.
pub fn nested_group(depth: usize) -> ExampleGroup {
    fn build(g: &mut crate::group::GroupBuilder, level: usize, depth: usize) {
        g.example(format!("first at {level}"), || ());
        g.example(format!("second at {level}"), || ());
        if level < depth {
            g.group(format!("level {}", level + 1), |g| build(g, level + 1, depth));
        }
    }

    example_group("level 0", |g| build(g, 0, depth))
}

pub fn empty_report() -> RunReport {
    RunReport {
        records: Vec::new(),
        filtered_out: 0,
        duration: Duration::ZERO,
        fmt_errors: Vec::new(),
    }
}

/// A cloneable in-memory stream, one clone goes into the runner, the other
/// one reads what was written.
#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    pub fn contents(&self) -> String {
        let guard = self.0.lock().unwrap();
        String::from_utf8_lossy(&guard).into_owned()
    }
}

/// A writer that fails every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
