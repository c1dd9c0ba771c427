use crate::error::Result;

pub trait UserInteraction {
    /// Show `prompt` on the current line and read the user's reply, without
    /// the trailing line terminator. End of input is `CalcError::InputClosed`.
    fn ask_user(&self, prompt: &str) -> Result<String>;

    /// Display a section heading, separated from earlier output by a blank line.
    fn show_heading(&self, title: &str);

    /// Display one plain line of text.
    fn show_line(&self, text: &str);

    /// Display a computed result.
    fn show_result(&self, text: &str);

    /// Log general information.
    fn log_info(&self, msg: &str);

    /// Log error information.
    fn log_error(&self, msg: &str);
}

// Exposed for testing
pub mod mocks {
    use super::*;
    use crate::error::CalcError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Scripted interaction: replies come from a queue and everything shown is
    /// recorded as the plain text a terminal would have printed.
    ///
    /// Prompts are recorded together with the reply, as the terminal echoes
    /// them (`"Number 1: 3"`). An empty queue behaves like end of input.
    #[derive(Default, Clone)]
    pub struct MockUserInteraction {
        pub inputs: Arc<Mutex<VecDeque<String>>>,
        pub transcript: Arc<Mutex<Vec<String>>>,
    }

    impl MockUserInteraction {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_inputs<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let mock = Self::new();
            for input in inputs {
                mock.add_input(input);
            }
            mock
        }

        pub fn add_input(&self, input: impl Into<String>) {
            self.inputs.lock().unwrap().push_back(input.into());
        }

        pub fn remaining_inputs(&self) -> usize {
            self.inputs.lock().unwrap().len()
        }

        pub fn transcript(&self) -> Vec<String> {
            self.transcript.lock().unwrap().clone()
        }

        /// Index of the first transcript line equal to `line`.
        pub fn position(&self, line: &str) -> Option<usize> {
            self.transcript.lock().unwrap().iter().position(|l| l == line)
        }

        /// Number of transcript lines equal to `line`.
        pub fn count(&self, line: &str) -> usize {
            self.transcript
                .lock()
                .unwrap()
                .iter()
                .filter(|l| *l == line)
                .count()
        }

        fn record(&self, line: impl Into<String>) {
            self.transcript.lock().unwrap().push(line.into());
        }
    }

    impl UserInteraction for MockUserInteraction {
        fn ask_user(&self, prompt: &str) -> Result<String> {
            let reply = self.inputs.lock().unwrap().pop_front();
            match reply {
                Some(reply) => {
                    self.record(format!("{prompt}{reply}"));
                    Ok(reply)
                }
                None => {
                    self.record(prompt);
                    Err(CalcError::InputClosed)
                }
            }
        }

        fn show_heading(&self, title: &str) {
            self.record("");
            self.record(format!("=== {title} ==="));
        }

        fn show_line(&self, text: &str) {
            self.record(text);
        }

        fn show_result(&self, text: &str) {
            self.record(text);
        }

        fn log_info(&self, msg: &str) {
            self.record(msg);
        }

        fn log_error(&self, msg: &str) {
            self.record(msg);
        }
    }
}
