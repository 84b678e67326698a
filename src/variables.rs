use std::collections::{BTreeMap, BTreeSet};

/// Variable name to value, walked in ascending name order.
pub type Bindings = BTreeMap<String, f64>;

/// Collects every maximal run of alphabetic characters.
///
/// Digits, operators and parentheses end a run without contributing to a
/// name, so `x2y` yields `x` and `y`. Names are case-sensitive.
pub fn extract_variables(expression: &str) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    let mut name = String::new();

    for c in expression.chars() {
        if c.is_alphabetic() {
            name.push(c);
        } else if !name.is_empty() {
            variables.insert(std::mem::take(&mut name));
        }
    }

    if !name.is_empty() {
        variables.insert(name);
    }

    variables
}

/// Replaces every occurrence of each bound name with its value's decimal text.
///
/// Names are replaced one at a time, in ascending name order, over the
/// partially substituted text. When one name is a prefix or substring of
/// another (`x` and `xy`), the shorter one is replaced inside the longer one
/// as well and the longer occurrence is lost. Callers needing both must
/// pick non-overlapping names.
pub fn substitute(expression: &str, bindings: &Bindings) -> String {
    bindings
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .fold(expression.to_string(), |text, (name, value)| {
            text.replace(name.as_str(), &format_value(*value))
        })
}

/// `f64` Display never switches to exponent notation, so finite values stay
/// within the digit/dot alphabet the evaluator reads.
fn format_value(value: f64) -> String {
    value.to_string()
}
