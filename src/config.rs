/// How the parenthesis check judges an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Only the final count of `(` minus `)` must be zero, so `)(` passes.
    #[default]
    NetBalance,
    /// The running count must also never drop below zero.
    Structural,
}

/// When an operator already on the stack is applied before a new one is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Only a `*` or `/` on top is applied, and only for an incoming `+` or `-`.
    /// Runs of equal-precedence operators are drained right to left:
    /// `8-2-3` is `8-(2-3)`.
    #[default]
    Legacy,
    /// Textbook shunting-yard: apply while the top binds at least as tightly.
    LeftAssociative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    pub validation: Validation,
    pub precedence: Precedence,
}

impl EvalConfig {
    pub fn new(validation: Validation, precedence: Precedence) -> Self {
        Self {
            validation,
            precedence,
        }
    }

    /// Both stricter behaviours switched on.
    pub fn strict() -> Self {
        Self::new(Validation::Structural, Precedence::LeftAssociative)
    }
}
