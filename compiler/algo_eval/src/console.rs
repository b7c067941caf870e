//! Console capability used by the I/O built-ins.
//!
//! The engine never touches stdin/stdout directly:
//! - [`StdConsole`]: process stdin and stdout (the CLI)
//! - [`BufferConsole`]: scripted input lines and captured output (tests)

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Write one line of program output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Read one line of input without its line terminator; `None` at end of
    /// input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Console that serves queued input lines and records output.
#[derive(Debug, Default)]
pub struct BufferConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console whose reads return `lines` in order, then end of input.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// Output as the terminal would show it.
    pub fn output(&self) -> String {
        let mut text = String::new();
        for line in &self.output {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
