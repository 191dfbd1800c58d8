mod error;
mod shell;
mod vars;


use std::io::Write;

use clap::{crate_version, Parser};
use error::{AppError, ErrorHandler, GuidingErrorHandler, SimpleErrorHandler};
use shell::{interactive::RustylineShell, single::SingleExpressionShell, Shell, ShellInput};
use sift_core::{FilterRegistry, Value};
use sift_eval::{Composer, Variables};
use sift_filters::register_all;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive, e.g. `sift_eval=trace`.
const LOG_ENV: &str = "SIFT_LOG";

/// Prompt displayed by the interactive shell.
const PROMPT: &str = "sift> ";

/// Command line options for the application's CLI.
#[derive(Parser)]
#[command(
    about = "Evaluates filter chains such as `names | exclude: Peter | join: ', '`.",
    version = crate_version!()
)]
struct Opts {
    /// Expression to evaluate. Starts an interactive prompt if omitted.
    expression: Option<String>,

    /// Binds a variable, e.g. `--var names="[Peter, Anton]"`
    #[arg(long = "var", value_name = "NAME=LITERAL", value_parser = vars::parse_var)]
    vars: Vec<(String, Value)>,

    /// Prints the names of all registered filters
    #[arg(long)]
    list_filters: bool,

    /// Raises the log level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let registry = FilterRegistry::new();
    if let Err(error) = register_all(&registry) {
        eprintln!("sift: {error}");
        std::process::exit(1);
    }

    if opts.list_filters {
        for name in registry.names() {
            println!("{name}");
        }
        return;
    }

    let shell: Box<dyn Shell> = match opts.expression {
        Some(expression) => Box::new(SingleExpressionShell::new(expression)),
        None => match RustylineShell::new(registry.names()) {
            Ok(shell) => Box::new(shell),
            Err(error) => {
                eprintln!("sift: could not start interactive prompt: {error}");
                std::process::exit(1);
            }
        },
    };

    let error_handler: Box<dyn ErrorHandler> = if atty::is(atty::Stream::Stderr) {
        Box::new(GuidingErrorHandler)
    } else {
        Box::new(SimpleErrorHandler)
    };

    let variables: Variables = opts.vars.into_iter().collect();
    let composer = Composer::new(&registry);
    let interactive = shell.is_interactive();

    match run_shell(
        shell,
        &composer,
        &variables,
        error_handler.as_ref(),
        &mut std::io::stdout(),
    ) {
        Ok(failures) if failures > 0 && !interactive => std::process::exit(1),
        Ok(_) => {}
        Err(error) => {
            error_handler.display_error(AppError::Io(error));
            std::process::exit(1);
        }
    }
}

/// Installs a log subscriber writing to stderr.
///
/// The filter is read from [`LOG_ENV`] if set, and is otherwise derived from
/// the verbosity.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main loop for running a [`Shell`]. Evaluates one expression per line of
/// input and writes each result to `out`.
///
/// Returns the number of expressions that failed.
fn run_shell(
    mut shell: Box<dyn Shell>,
    composer: &Composer,
    variables: &Variables,
    error_handler: &dyn ErrorHandler,
    out: &mut dyn Write,
) -> std::io::Result<usize> {
    let mut failures = 0;

    loop {
        let line = match shell.prompt_line(PROMPT) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout | ShellInput::None => break,
        };

        let expression = line.trim();
        if shell.is_interactive() {
            if expression.is_empty() {
                continue;
            }
            shell.add_history_entry(expression);
        }

        match composer.evaluate(expression, variables) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(error) => {
                failures += 1;
                error_handler.display_error(AppError::Eval(error, expression.to_owned()));
            }
        }
    }

    shell.save_history();
    Ok(failures)
}
