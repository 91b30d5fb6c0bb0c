//! Batch site checker CLI.
//!
//! Reads one URL per line from a file or stdin, runs the check pipeline
//! sequentially with per-item progress on stderr, prints the result table
//! (or JSON lines) to stdout, and writes the CSV export.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sitecheck::{export, BatchSession, CheckResult, Error, Options, DEFAULT_RELAY_PREFIX};

#[derive(Parser)]
#[command(
    name = "sitecheck",
    version,
    about = "Batch URL auditor for indexability and link-follow heuristics"
)]
struct Args {
    /// File with one URL per line; reads stdin when omitted
    input: Option<PathBuf>,

    /// Relay endpoint prefix; the percent-encoded target URL is appended
    #[arg(long, default_value = DEFAULT_RELAY_PREFIX)]
    relay: String,

    /// Fetch targets directly instead of through the relay
    #[arg(long)]
    direct: bool,

    /// Per-request timeout in seconds; 0 disables the timeout
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header to send
    #[arg(long)]
    user_agent: Option<String>,

    /// CSV output path
    #[arg(short, long, default_value = export::EXPORT_FILENAME)]
    output: PathBuf,

    /// Emit one JSON object per result instead of the table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        anyhow::bail!("no URLs given: pass a file argument or pipe one URL per line");
    }

    let mut options = Options {
        relay_prefix: (!args.direct).then(|| args.relay.clone()),
        timeout: (args.timeout > 0).then(|| Duration::from_secs(args.timeout)),
        ..Options::default()
    };
    if let Some(user_agent) = args.user_agent {
        options.user_agent = user_agent;
    }

    let mut session = BatchSession::new(&options)?;
    session
        .run_with_progress(&lines, |p| {
            eprintln!("Checking {}/{} - {}", p.index, p.total, p.line);
        })
        .await;

    if args.json {
        for result in session.results() {
            println!("{}", serde_json::to_string(result)?);
        }
    } else {
        print_table(session.results());
    }

    match fs::File::create(&args.output) {
        Ok(file) => match session.export_csv(file) {
            Ok(()) => eprintln!("Wrote: {}", args.output.display()),
            Err(Error::NoResults) => eprintln!("No results to export."),
            Err(e) => return Err(e).context("writing CSV export"),
        },
        Err(e) => return Err(e).with_context(|| format!("creating {}", args.output.display())),
    }

    eprintln!("Done. \"indexed\" and \"dofollow\" are heuristic checks, not guarantees.");
    Ok(())
}

fn print_table(results: &[CheckResult]) {
    println!("#\turl\talive\tstatus\tindexed\tlikely_dofollow\tnotes");
    for (i, result) in results.iter().enumerate() {
        let status = result
            .status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            result.url,
            if result.alive { "Yes" } else { "No" },
            status,
            result.indexed,
            result.likely_dofollow,
            result.notes.join("; ")
        );
    }
}
