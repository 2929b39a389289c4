use clap::Parser;
use splitbill::{AppConfig, bootstrap::init_logging};
use splitbill_application::DatePolicy;
use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process,
};

/// Split shared expenses from plain-English commands, one per line.
#[derive(Parser, Debug)]
#[command(name = "splitbill", version)]
struct Cli {
    /// File with one command per line (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Reject commands whose date is not YYYY-MM-DD
    #[arg(long)]
    strict_dates: bool,

    /// Print the balance report and expense history after processing
    #[arg(long)]
    report: bool,

    /// List example commands and exit
    #[arg(long)]
    examples: bool,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("splitbill: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Cow<'static, str>> {
    let mut config = AppConfig::from_env().map_err(|e| Cow::Owned(e.to_string()))?;
    if cli.strict_dates {
        config.date_policy = DatePolicy::Strict;
    }
    init_logging(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.examples {
        for example in splitbill_i18n::EXAMPLE_COMMANDS {
            writeln!(out, "{example}").map_err(io_error)?;
        }
        return Ok(());
    }

    let input: Box<dyn BufRead> = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| Cow::Owned(format!("cannot open {}: {e}", path.display())))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut session = config.session();
    tracing::debug!(date_policy = ?config.date_policy, "session started");

    for line in input.lines() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", session.interpret(&line)).map_err(io_error)?;
    }

    if cli.report {
        writeln!(out, "\n{}\n\n{}", session.balance_report(), session.history_report())
            .map_err(io_error)?;
    }

    Ok(())
}

fn io_error(err: io::Error) -> Cow<'static, str> {
    Cow::Owned(err.to_string())
}
