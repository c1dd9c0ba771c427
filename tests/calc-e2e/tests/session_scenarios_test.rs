use anyhow::Result;
use calc_engine::calculator::{FAREWELL_MESSAGE, INVALID_CHOICE_MESSAGE};
use calc_engine::input::INVALID_NUMBER_MESSAGE;
use calc_engine::interaction::mocks::MockUserInteraction;
use calc_engine::{CalcError, Calculator, CalculatorConfig, run_calculator};

/// Asserts that `first` appears in the transcript and `second` appears after it.
fn assert_in_order(ui: &MockUserInteraction, first: &str, second: &str) {
    let transcript = ui.transcript();
    let a = transcript
        .iter()
        .position(|l| l == first)
        .unwrap_or_else(|| panic!("{first:?} missing from {transcript:#?}"));
    let b = transcript
        .iter()
        .rposition(|l| l == second)
        .unwrap_or_else(|| panic!("{second:?} missing from {transcript:#?}"));
    assert!(a < b, "{first:?} should come before {second:?}");
}

#[test]
fn test_add_then_quit() -> Result<()> {
    let ui = MockUserInteraction::with_inputs(["1", "3", "4", "7"]);
    let summary = run_calculator(&ui, &CalculatorConfig::default())?;

    assert_in_order(&ui, "Result (Add): 7.0", FAREWELL_MESSAGE);
    assert_eq!(summary.calculations, 1);
    assert_eq!(ui.remaining_inputs(), 0);
    Ok(())
}

#[test]
fn test_divide_by_zero_then_quit() -> Result<()> {
    let ui = MockUserInteraction::with_inputs(["4", "10", "0", "7"]);
    let summary = run_calculator(&ui, &CalculatorConfig::default())?;

    assert_in_order(&ui, "Error: Division by zero is not allowed.", FAREWELL_MESSAGE);
    assert_eq!(summary.failed_calculations, 1);
    assert!(!ui.transcript().iter().any(|l| l.starts_with("Result")));
    Ok(())
}

#[test]
fn test_invalid_choice_then_quit() -> Result<()> {
    let ui = MockUserInteraction::with_inputs(["9", "7"]);
    let summary = run_calculator(&ui, &CalculatorConfig::default())?;

    assert_in_order(&ui, INVALID_CHOICE_MESSAGE, FAREWELL_MESSAGE);
    assert_eq!(summary.invalid_choices, 1);
    // The menu is shown again after the invalid choice.
    assert_eq!(ui.count("=== Clean Calculator ==="), 2);
    Ok(())
}

#[test]
fn test_malformed_operand_then_add() -> Result<()> {
    let ui = MockUserInteraction::with_inputs(["1", "abc", "2", "3", "7"]);
    run_calculator(&ui, &CalculatorConfig::default())?;

    assert_eq!(ui.count(INVALID_NUMBER_MESSAGE), 1);
    assert_in_order(&ui, "Number 1: abc", INVALID_NUMBER_MESSAGE);
    assert_in_order(&ui, INVALID_NUMBER_MESSAGE, "Number 1: 2");
    assert_in_order(&ui, "Number 2: 3", "Result (Add): 5.0");
    assert_in_order(&ui, "Result (Add): 5.0", FAREWELL_MESSAGE);
    Ok(())
}

#[test]
fn test_every_operation_in_one_session() -> Result<()> {
    let ui = MockUserInteraction::with_inputs([
        "1", "3", "4", //
        "2", "3", "4", //
        "3", "3", "4", //
        "4", "3", "4", //
        "5", "3", "4", //
        "6", "3", "4", //
        "7",
    ]);
    let summary = run_calculator(&ui, &CalculatorConfig::default())?;

    for line in [
        "Result (Add): 7.0",
        "Result (Subtract): -1.0",
        "Result (Multiply): 12.0",
        "Result (Divide): 0.75",
        "Result (Power): 81.0",
        "Result (Average): 3.5",
    ] {
        assert_in_order(&ui, line, FAREWELL_MESSAGE);
    }
    assert_eq!(summary.calculations, 6);
    assert_eq!(ui.count("7) Quit"), 7);
    Ok(())
}

#[test]
fn test_power_edge_results() -> Result<()> {
    let ui = MockUserInteraction::with_inputs([
        "5", "2", "-1", //
        "5", "0", "-1", //
        "5", "-8", "0.5", //
        "5", "10", "400", //
        "7",
    ]);
    run_calculator(&ui, &CalculatorConfig::default())?;

    assert!(ui.position("Result (Power): 0.5").is_some());
    assert!(ui.position("Result (Power): inf").is_some());
    assert!(ui.position("Result (Power): nan").is_some());
    assert_eq!(ui.count("Result (Power): inf"), 2);
    Ok(())
}

#[test]
fn test_input_lost_mid_operation() {
    let ui = MockUserInteraction::with_inputs(["2", "5"]);
    let err = Calculator::new(&ui).run().unwrap_err();

    assert!(matches!(err, CalcError::InputClosed));
    assert_eq!(ui.count(FAREWELL_MESSAGE), 0);
    assert_eq!(ui.transcript().last().map(String::as_str), Some("Number 2: "));
}
