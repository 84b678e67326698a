use crate::config::EvalConfig;
use crate::runner::{evaluate_with, strip_whitespace};
use crate::source::Prompt;
use std::io::{self, BufRead, Write};

pub fn start(config: &EvalConfig) {
    println!("varcalc v0.1.0");
    println!("Type 'exit' or press Ctrl+D to quit");
    println!();

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    run_session(&mut prompt, config);
}

/// Reads expressions line by line; variable values come from the same input.
pub fn run_session<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, config: &EvalConfig) {
    loop {
        let _ = write!(prompt.writer_mut(), "> ");
        let _ = prompt.writer_mut().flush();

        let line = match prompt.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                // EOF reached (Ctrl+D or piped input ended)
                let _ = writeln!(prompt.writer_mut());
                break;
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            let _ = writeln!(prompt.writer_mut(), "Goodbye!");
            break;
        }

        run_repl_command(line, prompt, config);
    }
}

fn run_repl_command<R: BufRead, W: Write>(
    source: &str,
    prompt: &mut Prompt<R, W>,
    config: &EvalConfig,
) {
    match evaluate_with(source, prompt, config) {
        Ok(value) => {
            let _ = writeln!(prompt.writer_mut(), "{}", value);
        }
        Err(error) => {
            error.report(&strip_whitespace(source), None);
        }
    }
}
