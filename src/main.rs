use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use llcalc::{
    Number, Session, SessionConfig,
    interpreter::session::DEFAULT_MAX_DEPTH,
    util::num::{DEFAULT_DECIMALS, DEFAULT_RADIX, FormatOptions},
};
use tracing_subscriber::{EnvFilter, fmt};

/// llcalc is an interactive calculator with variables and built-in math
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates in 64 bit integers instead of floating point.
    #[arg(short, long)]
    integer: bool,

    /// Radix results and symbols are printed in.
    #[arg(short, long, default_value_t = DEFAULT_RADIX,
          value_parser = clap::value_parser!(u32).range(2..=36))]
    radix: u32,

    /// Maximum number of fractional digits printed for real results.
    #[arg(short, long, default_value_t = DEFAULT_DECIMALS,
          value_parser = clap::value_parser!(u8).range(0..=15))]
    decimals: u8,

    /// How deeply expressions may nest.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prints the symbol table after every line.
    #[arg(short, long)]
    symbols: bool,

    /// Evaluates every line of a file instead of reading from the terminal.
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Expressions to evaluate in order within one session.
    expressions: Vec<String>,
}

impl Args {
    fn config(&self) -> SessionConfig {
        SessionConfig { max_depth: self.max_depth,
                        format: FormatOptions { radix:    self.radix,
                                                decimals: self.decimals, },
                        ..SessionConfig::default() }
    }
}

fn main() {
    fmt().with_writer(io::stderr)
         .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
         .init();

    let args = Args::parse();

    if args.integer {
        run::<i64>(&args);
    } else {
        run::<f64>(&args);
    }
}

fn run<N: Number>(args: &Args) {
    let mut session = Session::<N>::with_config(args.config());

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                 eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                           path.display());
                                                 std::process::exit(1);
                                             });
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            evaluate_line(&mut session, line, args.symbols);
        }
    } else if !args.expressions.is_empty() {
        for expression in &args.expressions {
            evaluate_line(&mut session, expression, args.symbols);
        }
    } else if let Err(e) = repl(&mut session, args.symbols) {
        tracing::error!(error = %e, "terminal input failed");
    }

    session.close();
}

fn repl<N: Number>(session: &mut Session<N>, dump_symbols: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        match input.trim() {
            "" => {},
            ":quit" => return Ok(()),
            ":symbols" => print!("{}", session.print_symbols()),
            line => evaluate_line(session, line, dump_symbols),
        }
    }
}

fn evaluate_line<N: Number>(session: &mut Session<N>, line: &str, dump_symbols: bool) {
    let value = session.parse(line);

    for diagnostic in session.diagnostics() {
        let severity = if diagnostic.is_fatal() { "error" } else { "warning" };
        eprintln!("{severity}: {diagnostic}");
    }
    println!("{}", session.format_number(value));

    if dump_symbols {
        println!("Symbol table:");
        print!("{}", session.print_symbols());
    }
}
