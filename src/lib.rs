// varcalc: arithmetic expression evaluator
//
// Expressions combine numbers, named variables, parentheses and the four
// binary operators. Variable values come from an injected `ValueSource`,
// either a prepared map or an interactive prompt.

// Public modules
pub mod config;
pub mod error;
pub mod evaluator;
pub mod repl;
pub mod runner;
pub mod source;
pub mod validator;
pub mod variables;

// Re-export commonly used items
pub use config::{EvalConfig, Precedence, Validation};
pub use error::{CalcError, ErrorKind, Span};
pub use evaluator::{calculate, calculate_with, Calculator};
pub use source::{Prompt, ValueSource};
pub use validator::{is_structurally_valid, is_valid};
pub use variables::{extract_variables, substitute, Bindings};

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::{evaluate, evaluate_with};
