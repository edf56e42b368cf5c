use crate::domain::ports::StatusSink;
use std::cell::RefCell;
use std::io::{self, ErrorKind, Write};
use std::rc::Rc;

/// Writes each status line to an `io::Write` target, standard output in the
/// binary.
///
/// The first write error is kept and later lines are dropped. Call
/// [`WriterSink::finish`] once dispatch is over to surface it.
pub struct WriterSink<W: Write> {
    writer: RefCell<W>,
    failure: RefCell<Option<io::Error>>,
}

pub type StdoutSink = WriterSink<io::Stdout>;

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
            failure: RefCell::new(None),
        }
    }

    /// Flushes the writer and reports the first write error, if any.
    ///
    /// A closed reader (`BrokenPipe`) ends the output early and is not an error.
    pub fn finish(&self) -> io::Result<()> {
        let result = match self.failure.borrow_mut().take() {
            Some(e) => Err(e),
            None => self.writer.borrow_mut().flush(),
        };
        match result {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }
}

impl<W: Write> StatusSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        if self.failure.borrow().is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer.borrow_mut(), "{}", line) {
            *self.failure.borrow_mut() = Some(e);
        }
    }
}

/// Records status lines in memory, in emission order.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// strategies and read the lines back through another.
#[derive(Default, Clone)]
pub struct InMemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl StatusSink for InMemorySink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
