use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use matrix_lexer::{render_diagnostic, BuildOptions, Lexer, LexerOptions, NoopHooks};

#[derive(Parser)]
#[command(name = "mlexer")]
#[command(about = "Print the tokens of matrix annotation files")]
struct Cli {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Lexer debug level; above zero logs every token
    #[arg(short, long, default_value_t = 1)]
    debug: u8,
    /// Skip rule table validation
    #[arg(long)]
    optimize: bool,
    /// Print `KIND (value)` instead of the full token
    #[arg(long)]
    brief: bool,
    /// Do not render diagnostics
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Diagnostics are rendered after each file, so the lexer never echoes them.
fn build_options(cli: &Cli) -> BuildOptions {
    BuildOptions {
        debug: Some(cli.debug),
        optimize: Some(cli.optimize),
        print_to_stderr: Some(false),
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut lexer = Lexer::new(NoopHooks, LexerOptions::default());
    lexer.build(build_options(&cli)).map_err(|error| anyhow!("{}", error))?;

    let mut failed = false;

    for path in &cli.files {
        println!("About to lex {}", path.display());

        let source = read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        if source.trim().is_empty() {
            continue;
        }

        lexer.reset();
        lexer.clear_diagnostics();
        let name = path.to_string_lossy();
        lexer.input(source.as_str(), Some(name.as_ref()));

        while let Some(token) = lexer.token() {
            if cli.brief {
                token.debug();
            } else {
                println!("{}", token);
            }
        }

        for error in lexer.diagnostics() {
            if !cli.quiet {
                eprint!("{}", render_diagnostic(error, &source));
            }
            failed = true;
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
