mod report;
mod scenarios;
mod transport;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use kirakuji_core::{API_BASE_ENV, ApiBase, KirakujiClient};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use scenarios::{Scenario, ScenarioResult, ScenarioRunner, get_scenario, list_scenarios};
use transport::ReqwestTransport;

#[derive(Debug, Parser)]
#[command(name = "kirakuji-tester", version)]
#[command(about = "Scenario runner for the Kirakuji posting and draw API")]
struct Args {
    /// API base URL (falls back to KIRAKUJI_API_BASE)
    #[arg(long, env = "KIRAKUJI_API_BASE")]
    api_base: Option<String>,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Confession text used by posting scenarios
    #[arg(long, default_value = "今日も闇を抱えています。")]
    content: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let started_at = Utc::now();
    let start_time = Instant::now();
    let selected = resolve_scenarios(&args.scenarios);
    let api_base = resolve_api_base(args.api_base.as_deref());
    let has_base = api_base.is_some();

    let client = KirakujiClient::new(ReqwestTransport::new(), api_base);
    let runner = ScenarioRunner::new(client, args.content.clone(), args.verbose);

    let mut results = Vec::new();
    for scenario in selected {
        if scenario.needs_network() && !has_base {
            log::warn!("{API_BASE_ENV} is not set; {} will fail", scenario.key());
        }
        println!("▶ {}", scenario.key().bright_yellow());
        results.push(runner.run(scenario, args.iterations).await);
    }

    write_reports(&args, &results, started_at, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎴 Kirakuji Scenario Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Known scenarios in request order; `all` expands in place, duplicates and
/// unknown names are dropped.
fn resolve_scenarios(arg: &str) -> Vec<Scenario> {
    let mut selected: Vec<Scenario> = Vec::new();
    for name in split_csv(arg) {
        let expanded: Vec<Scenario> = if name == "all" {
            Scenario::ALL.to_vec()
        } else if let Some(scenario) = get_scenario(&name) {
            vec![scenario]
        } else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            continue;
        };
        for scenario in expanded {
            if !selected.contains(&scenario) {
                selected.push(scenario);
            }
        }
    }
    selected
}

/// Normalize the base URL up front so the banner shows what requests will use.
fn resolve_api_base(raw: Option<&str>) -> Option<String> {
    match ApiBase::resolve(raw) {
        Ok(base) => {
            println!("API base: {}", base.normalized().bright_white());
            Some(base.normalized().to_string())
        }
        Err(err) => {
            eprintln!("⚠️  {err}");
            None
        }
    }
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    started_at: DateTime<Utc>,
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                report::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Kirakuji Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                report::generate_markdown_report(&mut output_target, results, started_at)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                report::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
