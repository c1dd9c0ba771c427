pub mod arithmetic;
pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod menu;
pub mod number;
pub mod registry;

pub use calculator::{Calculator, SessionState, SessionSummary, run_calculator};
pub use config::CalculatorConfig;
pub use error::{CalcError, Result};
pub use interaction::UserInteraction;
pub use registry::{Operation, OperationKind, OperationRegistry, QUIT_KEY, build_operations};
