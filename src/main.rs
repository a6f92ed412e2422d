use anyhow::{Error, Result};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream};

use logsift::input::FileOrStdin;
use logsift::{FilterConfig, FilterPipeline};

/// Check if the error chain contains a broken pipe error.
#[inline(always)]
fn is_broken_pipe(err: &Error) -> bool {
    // Look for a broken pipe error in the error chain
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                return true;
            }
        }
    }
    false
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the first NUM lines; a negative NUM drops the last |NUM| lines instead
    #[clap(short, long, value_name = "NUM", allow_negative_numbers = true)]
    first: Option<i64>,

    /// Print the last NUM lines; the sign of NUM is ignored
    #[clap(short, long, value_name = "NUM", allow_negative_numbers = true)]
    last: Option<i64>,

    /// Print lines that contain a timestamp in HH:MM:SS format
    #[clap(short, long)]
    timestamps: bool,

    /// Print lines that contain an IPv4 address, matching IPs are highlighted
    #[clap(short, long)]
    ipv4: bool,

    /// Print lines that contain an IPv6 address (standard notation), matching IPs are highlighted
    #[clap(short = 'I', long)]
    ipv6: bool,

    /// Use markers to highlight the matching strings
    #[clap(short = 'C', long, value_enum, default_value_t = ArgsColorChoice::Auto)]
    color: ArgsColorChoice,

    /// Log file to process. Leave empty or use "-" to read from stdin
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: Option<Utf8PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum ArgsColorChoice {
    Always,
    Never,
    Auto,
}

fn main() -> ExitCode {
    // Use a separate run function to handle the actual work
    let err = match run_main() {
        Ok(code) => return code,
        Err(err) => err,
    };

    // Handle broken pipe errors gracefully
    if is_broken_pipe(&err) {
        return ExitCode::SUCCESS;
    }

    // Print detailed error information based on environment variables
    if std::env::var("RUST_BACKTRACE").is_ok_and(|v| v == "1")
        && std::env::var("RUST_LIB_BACKTRACE").map_or(true, |v| v == "1")
    {
        writeln!(&mut std::io::stderr(), "{:?}", err).unwrap();
    } else {
        writeln!(&mut std::io::stderr(), "{:#}", err).unwrap();
    }

    ExitCode::FAILURE
}

fn run_main() -> Result<ExitCode> {
    let args = Args::parse();

    // Refuse a bare invocation: with no window and no predicate there is
    // nothing to filter by.
    if args.first.is_none()
        && args.last.is_none()
        && !args.timestamps
        && !args.ipv4
        && !args.ipv6
    {
        anyhow::bail!(
            "at least one of --first, --last, --timestamps, --ipv4, --ipv6 must be supplied"
        );
    }

    // Reading from an interactive terminal would block forever waiting for
    // input that is not coming.
    if args.file.is_none() && io::stdin().is_terminal() {
        anyhow::bail!("a file or standard input must be provided");
    }

    // determine appropriate colormode. auto simply
    // tests if stdout is a tty (if so, then yes color)
    // or otherwise don't color if it's to a file or another pipe
    let colormode = match args.color {
        ArgsColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            }
        }
        ArgsColorChoice::Always => ColorChoice::Always,
        ArgsColorChoice::Never => ColorChoice::Never,
    };

    run(args, colormode)?;

    Ok(ExitCode::SUCCESS)
}

fn run(args: Args, colormode: ColorChoice) -> Result<()> {
    let input = FileOrStdin::from_path(args.file.unwrap_or_else(|| Utf8PathBuf::from("-")));

    // Materialize the whole input before any filtering decision; the source
    // is closed again as soon as this block ends.
    let lines = {
        let mut reader = input.reader()?;
        reader.read_lines()?
    };

    let config = FilterConfig {
        timestamps: args.timestamps,
        ipv4: args.ipv4,
        ipv6: args.ipv6,
    };
    let pipeline = FilterPipeline::new(config, colormode == ColorChoice::Always)?;

    let mut out = io::BufWriter::with_capacity(65536, StandardStream::stdout(colormode));
    pipeline.run(&lines, args.first, args.last, &mut out)?;
    out.flush()?;

    Ok(())
}
