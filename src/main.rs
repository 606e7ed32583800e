use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_gate::config::Config;
use release_gate::export::{EnvmanSink, LogOnlySink, VariableSink};
use release_gate::history::FilterMode;
use release_gate::pipeline::{self, PipelineOptions};
use release_gate::service::HttpBuildService;
use release_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    about = "Compute release promotion, target binary range, and notes page for a tagged build"
)]
struct Args {
    #[arg(long, help = "Override the release tag from the environment")]
    tag: Option<String>,

    #[arg(long, help = "Custom release-notes template file path")]
    template: Option<PathBuf>,

    #[arg(long, help = "Directory to write the rendered notes page to")]
    output_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Only consider historical builds from the same major.minor line"
    )]
    same_minor_line: bool,

    #[arg(long, help = "Preview without writing the notes page or exporting variables")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Validate configuration before any network or file activity
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Some(tag) = args.tag {
        config.release_tag = tag;
    }

    let template_source = match &args.template {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => Some(source),
            Err(e) => {
                ui::display_error(&format!(
                    "Failed to read template '{}': {}",
                    path.display(),
                    e
                ));
                std::process::exit(1);
            }
        },
        None => None,
    };

    let service = HttpBuildService::new(&config.api_token);

    let sink: Box<dyn VariableSink> = if config.log_only_export || args.dry_run {
        Box::new(LogOnlySink)
    } else {
        Box::new(EnvmanSink)
    };

    let options = PipelineOptions {
        filter_mode: if args.same_minor_line {
            FilterMode::SameMinorLine
        } else {
            FilterMode::AllReleases
        },
        template_source,
        output_dir: args.output_dir.unwrap_or_else(|| PathBuf::from(".")),
        write_notes: !args.dry_run,
    };

    ui::display_status(&format!(
        "Processing release {} for {}",
        config.release_tag, config.app_name
    ));

    match pipeline::run(&config, &service, sink.as_ref(), &options) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            if args.dry_run {
                ui::display_status("Dry run: nothing written, nothing exported");
            } else {
                ui::display_success("Pipeline variables exported");
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
