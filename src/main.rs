#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use synth_report::core::{ResultsLayout, load_layout};
use synth_report::report_cmd::{self, ReportOptions};
use synth_report::{ReportError, ReportResult};

#[derive(Parser, Debug)]
#[command(name = "synth-report")]
#[command(about = "Generate area and power tables from synthesis outputs", long_about = None)]
struct Cli {
    /// Repository root (default: parent of the directory holding this executable)
    #[arg(long)]
    repo_root: Option<PathBuf>,

    /// Output directory (default: <repo>/syntesis/reports, or the layout's reports dir)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// TOML file overriding the results directory layout
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Also write a JSON summary of both tables to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable verbose logging (or set SYNTH_REPORT_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("SYNTH_REPORT_LOG").unwrap_or_else(|_| {
        if verbose { "synth_report=debug".to_string() } else { "synth_report=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn default_repo_root() -> ReportResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ReportError::io("<current executable>", e))?;
    let exe = exe.canonicalize().map_err(|e| ReportError::io(&exe, e))?;
    exe.parent()
        .and_then(|install_dir| install_dir.parent())
        .map(|p| p.to_path_buf())
        .ok_or_else(|| ReportError::Message(format!("cannot infer repository root from {}", exe.display())))
}

fn resolve_options(cli: Cli) -> ReportResult<ReportOptions> {
    let repo_root = match cli.repo_root {
        Some(p) => p,
        None => default_repo_root()?,
    };
    let repo_root = std::path::absolute(&repo_root).map_err(|e| ReportError::io(&repo_root, e))?;
    let layout = match &cli.layout {
        Some(p) => load_layout(p)?,
        None => ResultsLayout::default(),
    };
    let out_dir = cli.out_dir.unwrap_or_else(|| layout.reports_dir(&repo_root));
    Ok(ReportOptions { repo_root, out_dir, layout, json: cli.json })
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = resolve_options(cli).and_then(|opts| report_cmd::run(&opts));

    match result {
        Ok(outcome) => {
            for line in outcome.summary_lines() {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
