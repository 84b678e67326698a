use clap::{Arg, ArgMatches, Command};
use std::io;
use varcalc::{evaluate_with, repl, runner::strip_whitespace, EvalConfig, Precedence, Prompt, Validation};

fn main() {
    let matches = Command::new("varcalc")
        .about("Evaluates arithmetic expressions, asking for the value of each variable")
        .arg(
            Arg::new("expression")
                .help("The expression to evaluate, e.g. \"(2+x)*4\"")
                .value_name("EXPR")
                .index(1),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject parentheses that close before they open, such as \")(\"")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("left-assoc")
                .long("left-assoc")
                .help("Apply equal-precedence operators left to right")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config = config_from(&matches);

    match matches.get_one::<String>("expression") {
        Some(expression) if !matches.get_flag("interactive") => {
            run_expression(expression, &config)
        }
        _ => repl::start(&config),
    }
}

fn config_from(matches: &ArgMatches) -> EvalConfig {
    let validation = if matches.get_flag("strict") {
        Validation::Structural
    } else {
        Validation::NetBalance
    };
    let precedence = if matches.get_flag("left-assoc") {
        Precedence::LeftAssociative
    } else {
        Precedence::Legacy
    };
    EvalConfig::new(validation, precedence)
}

fn run_expression(expression: &str, config: &EvalConfig) {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    match evaluate_with(expression, &mut prompt, config) {
        Ok(value) => println!("{}", value),
        Err(error) => {
            error.report(&strip_whitespace(expression), None);
            std::process::exit(1);
        }
    }
}
