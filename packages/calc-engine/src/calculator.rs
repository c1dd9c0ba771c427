use tracing::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::input::prompt_float;
use crate::interaction::UserInteraction;
use crate::menu::print_menu;
use crate::number::format_number;
use crate::registry::{OperationRegistry, QUIT_KEY, build_operations};

pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const FIRST_OPERAND_PROMPT: &str = "Number 1: ";
pub const SECOND_OPERAND_PROMPT: &str = "Number 2: ";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please pick a menu number.";
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Counters collected over one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub calculations: usize,
    pub failed_calculations: usize,
    pub invalid_choices: usize,
}

/// The menu-driven read/evaluate/print loop.
pub struct Calculator<'a, U: ?Sized> {
    ui: &'a U,
    ops: OperationRegistry,
    title: String,
    state: SessionState,
    summary: SessionSummary,
}

impl<'a, U> Calculator<'a, U>
where
    U: UserInteraction + ?Sized,
{
    pub fn new(ui: &'a U) -> Self {
        Self {
            ui,
            ops: build_operations(),
            title: crate::config::default_title(),
            state: SessionState::Running,
            summary: SessionSummary::default(),
        }
    }

    pub fn with_config(self, config: &CalculatorConfig) -> Self {
        self.with_title(config.title.clone())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Runs iterations until the user quits.
    ///
    /// Returns an error only when the input stream is lost.
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Calculator session started");
        while self.state == SessionState::Running {
            self.step()?;
        }
        debug!(
            calculations = self.summary.calculations,
            failed = self.summary.failed_calculations,
            invalid_choices = self.summary.invalid_choices,
            "Calculator session ended"
        );
        Ok(self.summary)
    }

    /// One iteration: menu, choice, and for a known operation its operands and result.
    pub fn step(&mut self) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        print_menu(self.ui, &self.ops, &self.title);
        let raw = self.ui.ask_user(CHOICE_PROMPT)?;
        let choice = raw.trim();

        if choice == QUIT_KEY {
            self.ui.log_info(FAREWELL_MESSAGE);
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        let Some(op) = self.ops.get(choice).copied() else {
            debug!("Unknown menu choice: {:?}", choice);
            self.summary.invalid_choices += 1;
            self.ui.log_error(INVALID_CHOICE_MESSAGE);
            return Ok(self.state);
        };

        let a = prompt_float(self.ui, FIRST_OPERAND_PROMPT)?;
        let b = prompt_float(self.ui, SECOND_OPERAND_PROMPT)?;

        match op.apply(a, b) {
            Ok(result) => {
                debug!("{}({}, {}) = {}", op.name, a, b, result);
                self.summary.calculations += 1;
                self.ui
                    .show_result(&format!("Result ({}): {}", op.name, format_number(result)));
            }
            // Arithmetic only fails with `DivisionByZero`; report it and continue.
            Err(err) => {
                warn!("{} failed: {}", op.name, err);
                self.summary.failed_calculations += 1;
                self.ui.log_error(&format!("Error: {err}"));
            }
        }

        Ok(self.state)
    }
}

/// Runs a full session with the given configuration.
pub fn run_calculator<U>(ui: &U, config: &CalculatorConfig) -> Result<SessionSummary>
where
    U: UserInteraction + ?Sized,
{
    Calculator::new(ui).with_config(config).run()
}
