use std::collections::BTreeMap;

use crate::arithmetic;
use crate::error::Result;

/// Menu key that ends the session. Always shown as the last menu entry and
/// never assigned to an operation.
pub const QUIT_KEY: &str = "7";

/// The closed set of operations the calculator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Average,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::Average,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OperationKind::Add => "1",
            OperationKind::Subtract => "2",
            OperationKind::Multiply => "3",
            OperationKind::Divide => "4",
            OperationKind::Power => "5",
            OperationKind::Average => "6",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "Add",
            OperationKind::Subtract => "Subtract",
            OperationKind::Multiply => "Multiply",
            OperationKind::Divide => "Divide",
            OperationKind::Power => "Power",
            OperationKind::Average => "Average",
        }
    }

    /// Applies the operation to an operand pair.
    pub fn evaluate(self, a: f64, b: f64) -> Result<f64> {
        match self {
            OperationKind::Add => Ok(arithmetic::add(a, b)),
            OperationKind::Subtract => Ok(arithmetic::subtract(a, b)),
            OperationKind::Multiply => Ok(arithmetic::multiply(a, b)),
            OperationKind::Divide => arithmetic::divide(a, b),
            OperationKind::Power => Ok(arithmetic::power(a, b)),
            OperationKind::Average => Ok(arithmetic::average(a, b)),
        }
    }
}

/// One menu entry: the key the user types, the label shown, and the math behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: OperationKind,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            key: kind.key(),
            name: kind.name(),
            kind,
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        self.kind.evaluate(a, b)
    }
}

/// Operations keyed by menu key. Iteration order is ascending key order.
pub type OperationRegistry = BTreeMap<&'static str, Operation>;

/// Builds the fixed operation table. Every call returns an identical registry.
pub fn build_operations() -> OperationRegistry {
    OperationKind::ALL
        .into_iter()
        .map(Operation::new)
        .map(|op| (op.key, op))
        .collect()
}
