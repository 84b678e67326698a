use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parentheses failed the validity check.
    InvalidSyntax,
    DivisionByZero,
    InvalidOperator,
    /// A run of digits and dots that `f64` refuses, including the empty run.
    MalformedNumber,
    /// An operator or `)` found fewer operands or markers than it needs.
    MalformedExpression,
    /// A binding map had no entry for a discovered variable.
    MissingValue,
    InputExhausted,
    MalformedInput,
    /// Reading from the value source failed.
    Io,
}

#[derive(Debug, Clone)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
    /// The text `span` points into, when it differs from what the caller holds.
    pub text: Option<String>,
}

impl CalcError {
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: None,
            text: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, message: String, help: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: Some(help),
            text: None,
        }
    }

    pub fn invalid_syntax(span: Span) -> Self {
        Self::new_with_help(
            ErrorKind::InvalidSyntax,
            span,
            "Invalid expression!".to_string(),
            "every '(' needs a matching ')'".to_string(),
        )
    }

    pub fn division_by_zero(span: Span) -> Self {
        Self::new(ErrorKind::DivisionByZero, span, "Division by zero!".to_string())
    }

    pub fn invalid_operator(span: Span, op: char) -> Self {
        Self::new(
            ErrorKind::InvalidOperator,
            span,
            format!("Invalid operator: {}", op),
        )
    }

    pub fn malformed_number(span: Span, literal: &str) -> Self {
        let message = if literal.is_empty() {
            "Expected a number".to_string()
        } else {
            format!("Invalid number: {}", literal)
        };
        Self::new_with_help(
            ErrorKind::MalformedNumber,
            span,
            message,
            "operands are digits with at most one '.'".to_string(),
        )
    }

    pub fn malformed_expression(span: Span, message: String) -> Self {
        Self::new(ErrorKind::MalformedExpression, span, message)
    }

    pub fn missing_value(name: &str) -> Self {
        Self::new(
            ErrorKind::MissingValue,
            Span::new(0, 0),
            format!("No value bound for variable '{}'", name),
        )
    }

    pub fn input_exhausted(name: &str) -> Self {
        Self::new(
            ErrorKind::InputExhausted,
            Span::new(0, 0),
            format!("Input ended before a value for variable '{}' was read", name),
        )
    }

    pub fn malformed_input(name: &str, token: &str) -> Self {
        Self::new(
            ErrorKind::MalformedInput,
            Span::new(0, 0),
            format!("'{}' is not a number (variable '{}')", token, name),
        )
    }

    pub fn io_error(name: &str, error: &std::io::Error) -> Self {
        Self::new(
            ErrorKind::Io,
            Span::new(0, 0),
            format!("Failed to read a value for variable '{}': {}", name, error),
        )
    }

    /// One-line form used where a full diagnostic is not wanted.
    pub fn headline(&self) -> String {
        format!("Error: {}", self.message)
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<expr>");
        let source = self.text.as_deref().unwrap_or(source);

        let color = match self.kind {
            ErrorKind::InvalidSyntax | ErrorKind::MalformedExpression => Color::Yellow,
            ErrorKind::MalformedNumber | ErrorKind::InvalidOperator => Color::Red,
            ErrorKind::DivisionByZero => Color::Magenta,
            ErrorKind::MissingValue
            | ErrorKind::InputExhausted
            | ErrorKind::MalformedInput
            | ErrorKind::Io => {
                Color::Blue
            }
        };

        let kind_str = match self.kind {
            ErrorKind::InvalidSyntax => "Syntax Error",
            ErrorKind::MalformedNumber | ErrorKind::MalformedExpression => "Parse Error",
            ErrorKind::DivisionByZero | ErrorKind::InvalidOperator => "Arithmetic Error",
            ErrorKind::MissingValue
            | ErrorKind::InputExhausted
            | ErrorKind::MalformedInput
            | ErrorKind::Io => {
                "Input Error"
            }
        };

        // Spans are char offsets; anything past the end is clamped.
        let end = self.span.end.min(source.chars().count());
        let start = self.span.start.min(end);

        if start == end {
            eprintln!("{}: {}", kind_str.fg(color), self.message);
            return;
        }

        let mut report_builder = Report::build(ReportKind::Error, filename, start)
            .with_message(format!("{}: {}", kind_str.fg(color), self.message))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        if let Err(error) = report_builder
            .finish()
            .eprint((filename, Source::from(source)))
        {
            eprintln!("Error: {}", self.message);
            eprintln!("(failed to render diagnostic: {})", error);
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalcError {}
