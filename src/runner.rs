use crate::config::EvalConfig;
use crate::error::{CalcError, Span};
use crate::evaluator::calculate_with;
use crate::source::ValueSource;
use crate::validator;
use crate::variables::{extract_variables, substitute, Bindings};

/// Evaluates `expression` with default settings, asking `source` for each variable.
///
/// Unbalanced parentheses are not an error here: a diagnostic goes to stderr
/// and the result is `NaN`, without consulting `source`. Every other failure
/// is returned as `Err`.
pub fn evaluate<S: ValueSource>(expression: &str, source: &mut S) -> Result<f64, CalcError> {
    evaluate_with(expression, source, &EvalConfig::default())
}

pub fn evaluate_with<S: ValueSource>(
    expression: &str,
    source: &mut S,
    config: &EvalConfig,
) -> Result<f64, CalcError> {
    let expression = strip_whitespace(expression);

    if !validator::check(&expression, config.validation) {
        let error = CalcError::invalid_syntax(Span::new(0, expression.chars().count()));
        eprintln!("{}", error.headline());
        return Ok(f64::NAN);
    }

    let bindings = collect_bindings(&expression, source)?;
    let numeric = substitute(&expression, &bindings);

    calculate_with(&numeric, config.precedence)
}

/// Asks `source` once per distinct variable, in ascending name order.
pub fn collect_bindings<S: ValueSource>(
    expression: &str,
    source: &mut S,
) -> Result<Bindings, CalcError> {
    let mut bindings = Bindings::new();
    for name in extract_variables(expression) {
        let value = source.value_for(&name)?;
        bindings.insert(name, value);
    }
    Ok(bindings)
}

pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
