use anyhow::{bail, Context, Result};
use clap::Parser;
use expression_calculator::calculator::{Calculator, ErrorKind};
use log::{debug, error};
use string_builder::Builder;

/// Absolute tolerance when comparing fixture results.
const TOLERANCE: f64 = 0.01;

/// Converts and evaluates infix arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The infix expression to evaluate; runs the demonstration suite when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

/// What a demonstration fixture is expected to produce.
enum Expectation {
    Value(f64),
    Error(ErrorKind),
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    let mut calculator = Calculator::new();
    match arguments.expression {
        Some(expression) => evaluate_expression(&mut calculator, &expression),
        None => run_demonstration(&mut calculator),
    }
}

fn evaluate_expression(calculator: &mut Calculator, expression: &str) -> Result<()> {
    let postfix = calculator
        .infix_to_postfix(expression)
        .with_context(|| format!("Failed to convert '{}' to postfix", expression))?;
    debug!("postfix form: {}", postfix);

    let value = calculator
        .evaluate_postfix(&postfix)
        .with_context(|| format!("Failed to evaluate '{}'", postfix))?;
    println!("{}", value);
    Ok(())
}

/// Runs every built-in fixture and prints an expected-vs-actual report
/// block for each, in the manner of a smoke test.
fn run_demonstration(calculator: &mut Calculator) -> Result<()> {
    let fixtures: [(&str, Expectation); 16] = [
        ("(3 + 4) * 5", Expectation::Value(35.0)),
        ("7 * 2 + 4", Expectation::Value(18.0)),
        ("8 + (5 * (2 + 4))", Expectation::Value(38.0)),
        ("(6 / 2 + 3) * 4", Expectation::Value(24.0)),
        ("9 + (5 * (2 + 8 * 4))", Expectation::Value(179.0)),
        ("log(2 + 3) / 5", Expectation::Value(0.13979)),
        ("log(10) ^ 3 + 2", Expectation::Value(3.0)),
        ("(45 + 60) * cos(30)", Expectation::Value(90.9327)),
        ("sen(45)^2 + 0.5", Expectation::Value(1.0)),
        ("raiz(64) % 3", Expectation::Value(2.0)),
        ("-5 * (-3 + 1)", Expectation::Value(10.0)),
        ("2 ^ 3 ^ 2", Expectation::Value(512.0)),
        ("10 / 0", Expectation::Error(ErrorKind::Math)),
        ("tg(90)", Expectation::Error(ErrorKind::Math)),
        ("5 + * 3", Expectation::Error(ErrorKind::Syntax)),
        ("(10 + 2", Expectation::Error(ErrorKind::Syntax)),
    ];

    let mut failures = 0;
    for (expression, expectation) in &fixtures {
        let (report, passed) = fixture_report(calculator, expression, expectation)?;
        print!("{}", report);
        if !passed {
            error!("fixture '{}' did not match its expectation", expression);
            failures += 1;
        }
    }

    println!("{} of {} fixtures passed", fixtures.len() - failures, fixtures.len());
    if failures > 0 {
        bail!("{} of {} fixtures failed", failures, fixtures.len());
    }
    Ok(())
}

fn fixture_report(
    calculator: &mut Calculator,
    expression: &str,
    expectation: &Expectation,
) -> Result<(String, bool)> {
    let mut builder = Builder::new(128);
    builder.append("----------------------------------------\n");
    builder.append(format!("expression : \"{}\"\n", expression));

    let outcome = calculator.infix_to_postfix(expression).and_then(|postfix| {
        builder.append(format!("postfix    : \"{}\"\n", postfix));
        calculator.evaluate_postfix(&postfix)
    });

    let passed = match (&outcome, expectation) {
        (Ok(value), Expectation::Value(expected)) => {
            builder.append(format!("result     : {} (expected {})\n", value, expected));
            (value - expected).abs() < TOLERANCE
        }
        (Err(calc_error), Expectation::Error(expected_kind)) => {
            builder.append(format!("error      : {}\n", calc_error));
            calc_error.kind() == *expected_kind
        }
        (Ok(value), Expectation::Error(expected_kind)) => {
            builder.append(format!(
                "result     : {} (expected {:?} error)\n",
                value, expected_kind
            ));
            false
        }
        (Err(calc_error), Expectation::Value(expected)) => {
            builder.append(format!(
                "error      : {} (expected {})\n",
                calc_error, expected
            ));
            false
        }
    };
    builder.append(if passed {
        "status     : ok\n"
    } else {
        "status     : MISMATCH\n"
    });

    let report = builder
        .string()
        .context("Failed to build fixture report")?;
    Ok((report, passed))
}
