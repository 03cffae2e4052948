use decimal_literal::{evaluate_format, evaluate_str, Decimal, RugDecimal};
use log::{debug, LevelFilter, Log, Metadata, Record};
use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use structopt::{clap::AppSettings, StructOpt};

#[derive(StructOpt)]
#[structopt(about = "exact decimal arithmetic")]
struct Opt {
    /// More logging, repeatable
    #[structopt(short, long, parse(from_occurrences), global = true)]
    verbose: u8,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Evaluate every non-blank line of each file
    Run {
        #[structopt(parse(from_os_str))]
        filenames: Vec<PathBuf>,
        /// Fixed number of fractional digits to print
        #[structopt(short, long)]
        scale: Option<u16>,
    },
    /// Evaluate one expression; `{}` placeholders take --operand values in order
    // Expressions and operands may start with a minus sign.
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Eval {
        expression: String,
        #[structopt(short, long = "operand", number_of_values = 1)]
        operands: Vec<String>,
        /// Fixed number of fractional digits to print
        #[structopt(short, long)]
        scale: Option<u16>,
    },
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn show(value: &RugDecimal, scale: Option<u16>) -> String {
    match scale {
        Some(digits) => format!("{:.*}", usize::from(digits), value),
        None => value.to_string(),
    }
}

fn eval(
    expression: &str,
    operands: &[String],
    scale: Option<u16>,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let operands = operands
        .iter()
        .map(|operand| RugDecimal::from_literal(operand))
        .collect::<Result<Vec<_>, _>>()?;
    let result = evaluate_format(expression, operands)?;
    writeln!(out, "{}", show(&result, scale))?;
    Ok(())
}

// Returns whether every non-blank line evaluated.
fn run_source(
    name: &str,
    source: &str,
    scale: Option<u16>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    let mut ok = true;
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_str::<RugDecimal>(line) {
            Ok(value) => writeln!(out, "{}", show(&value, scale))?,
            Err(error) => {
                writeln!(err, "{}:{}: {}", name, index + 1, error)?;
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn run(
    filenames: &[PathBuf],
    scale: Option<u16>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    let mut ok = true;
    for filename in filenames {
        let name = filename.display().to_string();
        let source = match fs::read_to_string(filename) {
            Ok(source) => source,
            Err(error) => {
                writeln!(err, "{}: {}", name, error)?;
                ok = false;
                continue;
            }
        };
        debug!("running {}", name);
        ok &= run_source(&name, &source, scale, out, err)?;
    }
    Ok(ok)
}

fn execute(command: Command, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<bool> {
    match command {
        Command::Run { filenames, scale } => run(&filenames, scale, out, err),
        Command::Eval {
            expression,
            operands,
            scale,
        } => match eval(&expression, &operands, scale, out) {
            Ok(()) => Ok(true),
            Err(error) => {
                writeln!(err, "error: {}", error)?;
                Ok(false)
            }
        },
    }
}

fn main() -> ExitCode {
    let opt = Opt::from_args();
    init_logging(opt.verbose);
    let stdout = io::stdout();
    let stderr = io::stderr();
    match execute(opt.command, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
