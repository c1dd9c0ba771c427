use calc_engine::{CalcError, UserInteraction};
use console::style;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Line-oriented terminal: prompts and replies on one line, styled output
/// when colors are enabled.
pub struct TerminalInteraction {
    input: RefCell<Box<dyn BufRead>>,
    output: RefCell<Box<dyn Write>>,
    colors: bool,
}

impl TerminalInteraction {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>, colors: bool) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            colors,
        }
    }

    /// Process stdin/stdout, styled only when stdout supports colors.
    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::stdin().lock()),
            Box::new(io::stdout()),
            console::colors_enabled(),
        )
    }

    fn emit(&self, line: impl Display) {
        let mut out = self.output.borrow_mut();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl UserInteraction for TerminalInteraction {
    fn ask_user(&self, prompt: &str) -> Result<String, CalcError> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        // Raw bytes: a non-UTF-8 line is a malformed reply, not a broken terminal.
        let mut bytes = Vec::new();
        let read = self.input.borrow_mut().read_until(b'\n', &mut bytes)?;
        if read == 0 {
            return Err(CalcError::InputClosed);
        }

        let line = String::from_utf8_lossy(&bytes).into_owned();
        let reply = line.strip_suffix('\n').unwrap_or(&line);
        let reply = reply.strip_suffix('\r').unwrap_or(reply);
        Ok(reply.to_string())
    }

    fn show_heading(&self, title: &str) {
        self.emit("");
        self.emit(
            style(format!("=== {} ===", title))
                .bold()
                .cyan()
                .force_styling(self.colors),
        );
    }

    fn show_line(&self, text: &str) {
        self.emit(text);
    }

    fn show_result(&self, text: &str) {
        self.emit(style(text).green().force_styling(self.colors));
    }

    fn log_info(&self, msg: &str) {
        self.emit(style(msg).green().force_styling(self.colors));
    }

    fn log_error(&self, msg: &str) {
        self.emit(style(msg).red().force_styling(self.colors));
    }
}
