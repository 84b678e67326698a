use crate::config::Precedence;
use crate::error::{CalcError, ErrorKind, Span};

/// Two-stack evaluator over a purely numeric expression.
///
/// Operands are digit/dot runs; `(`, `)`, `+`, `-`, `*`, `/` are the only
/// other characters it understands. Anything else reaches the operand branch
/// and fails as an empty number.
pub struct Calculator {
    source: Vec<char>,
    current: usize,
    precedence: Precedence,
    operands: Vec<f64>,
    // Pending operators and `(` markers, with their offsets for diagnostics.
    operators: Vec<(char, usize)>,
}

impl Calculator {
    pub fn new(expression: &str, precedence: Precedence) -> Self {
        Self {
            source: expression.chars().collect(),
            current: 0,
            precedence,
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    pub fn calculate(mut self) -> Result<f64, CalcError> {
        while !self.is_at_end() {
            self.scan_char()?;
        }

        while !self.operators.is_empty() {
            self.process_operator()?;
        }

        self.result()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    fn scan_char(&mut self) -> Result<(), CalcError> {
        let pos = self.current;
        let c = self.peek();

        match c {
            '(' => {
                self.operators.push((c, pos));
                self.current += 1;
            }
            ')' => {
                self.close_group(pos)?;
                self.current += 1;
            }
            c if is_operator(c) => {
                while let Some(&(top, _)) = self.operators.last() {
                    if !self.applies_before(top, c) {
                        break;
                    }
                    self.process_operator()?;
                }
                self.operators.push((c, pos));
                self.current += 1;
            }
            _ => self.number()?,
        }

        Ok(())
    }

    fn close_group(&mut self, pos: usize) -> Result<(), CalcError> {
        loop {
            match self.operators.last() {
                Some(&('(', _)) => {
                    self.operators.pop();
                    return Ok(());
                }
                Some(_) => self.process_operator()?,
                None => {
                    return Err(CalcError::malformed_expression(
                        Span::single(pos),
                        "')' has no matching '('".to_string(),
                    ))
                }
            }
        }
    }

    fn applies_before(&self, top: char, incoming: char) -> bool {
        match self.precedence {
            Precedence::Legacy => has_higher_precedence(top, incoming),
            Precedence::LeftAssociative => binding_power(top) >= binding_power(incoming),
        }
    }

    /// Consumes the longest run of digits and dots and pushes it as one operand.
    fn number(&mut self) -> Result<(), CalcError> {
        let start = self.current;
        while !self.is_at_end() && (self.peek().is_ascii_digit() || self.peek() == '.') {
            self.current += 1;
        }

        let literal: String = self.source[start..self.current].iter().collect();
        let span = if literal.is_empty() {
            Span::single(start)
        } else {
            Span::new(start, self.current)
        };

        let value = literal
            .parse::<f64>()
            .map_err(|_| CalcError::malformed_number(span, &literal))?;
        self.operands.push(value);
        Ok(())
    }

    /// Pops one operator and applies it to the top two operands.
    fn process_operator(&mut self) -> Result<(), CalcError> {
        let Some((op, pos)) = self.operators.pop() else {
            return Ok(());
        };

        let right = self.pop_operand(op, pos)?;
        let left = self.pop_operand(op, pos)?;
        let result = perform_operation(left, right, op, Span::single(pos))?;
        self.operands.push(result);
        Ok(())
    }

    fn pop_operand(&mut self, op: char, pos: usize) -> Result<f64, CalcError> {
        self.operands.pop().ok_or_else(|| {
            CalcError::new_with_help(
                ErrorKind::MalformedExpression,
                Span::single(pos),
                format!("'{}' is missing an operand", op),
                "signs are not supported; write (0-x) instead of -x".to_string(),
            )
        })
    }

    /// The top operand is the result; anything beneath it is dropped, so
    /// `(2)(3)` yields `3`.
    fn result(mut self) -> Result<f64, CalcError> {
        let end = self.source.len();
        self.operands.pop().ok_or_else(|| {
            CalcError::malformed_expression(Span::new(0, end), "Empty expression".to_string())
        })
    }
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// True only for a `*`/`/` on the stack meeting an incoming `+`/`-`.
fn has_higher_precedence(top: char, incoming: char) -> bool {
    matches!(top, '*' | '/') && matches!(incoming, '+' | '-')
}

fn binding_power(op: char) -> u8 {
    match op {
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

fn perform_operation(left: f64, right: f64, op: char, span: Span) -> Result<f64, CalcError> {
    match op {
        '+' => Ok(left + right),
        '-' => Ok(left - right),
        '*' => Ok(left * right),
        '/' => {
            if right == 0.0 {
                return Err(CalcError::division_by_zero(span));
            }
            Ok(left / right)
        }
        // A leftover '(' lands here when unbalanced text bypasses validation.
        _ => Err(CalcError::invalid_operator(span, op)),
    }
}

/// Evaluates a numeric expression with the default operator draining.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    calculate_with(expression, Precedence::default())
}

pub fn calculate_with(expression: &str, precedence: Precedence) -> Result<f64, CalcError> {
    Calculator::new(expression, precedence)
        .calculate()
        .map_err(|error| error.with_text(expression))
}
