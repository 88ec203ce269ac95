use std::cell::{Ref, RefCell};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::rc::Rc;

/// Line-oriented input and output shared between the app and human movers.
///
/// Both human sides of a `start user user` game read from the same input, so
/// the handles are reference-counted and only borrowed for a single call.
pub struct Console<R, W> {
    input: Rc<RefCell<R>>,
    output: Rc<RefCell<W>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Console {
            input: Rc::clone(&self.input),
            output: Rc::clone(&self.output),
        }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input: Rc::new(RefCell::new(input)),
            output: Rc::new(RefCell::new(output)),
        }
    }

    /// Next input line without its terminator, `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Write `text` as-is and flush, for prompts.
    pub fn print(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.borrow_mut();
        output.write_all(text.as_bytes())?;
        output.flush()
    }

    pub fn println(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.borrow_mut();
        writeln!(output, "{text}")?;
        output.flush()
    }

    pub fn output(&self) -> Ref<'_, W> {
        self.output.borrow()
    }
}
