use crate::config::Validation;

/// Net-balance check: true iff every `(` is cancelled by some `)`.
///
/// Ordering is not inspected, so `")("` counts as valid.
pub fn is_valid(expression: &str) -> bool {
    let mut balance: i64 = 0;
    for c in expression.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }
    balance == 0
}

/// Like [`is_valid`], but a `)` may never close more groups than are open.
pub fn is_structurally_valid(expression: &str) -> bool {
    let mut balance: i64 = 0;
    for c in expression.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance -= 1;
                if balance < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    balance == 0
}

pub fn check(expression: &str, validation: Validation) -> bool {
    match validation {
        Validation::NetBalance => is_valid(expression),
        Validation::Structural => is_structurally_valid(expression),
    }
}
