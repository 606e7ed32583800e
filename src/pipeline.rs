//! Release pipeline orchestration
//!
//! Runs the whole single-shot computation: parse the release tag, compute
//! the target binary range, fetch build history and decide promotion, render
//! the notes page, and finally export the pipeline variables. Every output
//! is computed before anything is exported, so a failure anywhere leaves no
//! partial variables behind.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::Version;
use crate::error::Result;
use crate::export::{self, PipelineVariables, VariableSink};
use crate::history::FilterMode;
use crate::notes::{self, NotesContext};
use crate::promotion::ReleaseDecision;
use crate::service::BuildService;
use crate::target::TargetBinaryRange;

/// Knobs for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Which historical builds the promotion decision considers
    pub filter_mode: FilterMode,

    /// Custom template source; the built-in template is used when absent
    pub template_source: Option<String>,

    /// Directory the rendered notes page is written to
    pub output_dir: PathBuf,

    /// Skip writing the notes page (preview runs)
    pub write_notes: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            filter_mode: FilterMode::default(),
            template_source: None,
            output_dir: PathBuf::from("."),
            write_notes: true,
        }
    }
}

/// Summary of a completed pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub version: Version,
    pub target_binary: TargetBinaryRange,
    pub decision: ReleaseDecision,
    pub notes_path: PathBuf,
    pub variables: PipelineVariables,
}

/// Run the full release pipeline
///
/// # Arguments
/// * `config` - Validated pipeline configuration
/// * `service` - Build-tracking service client
/// * `sink` - Destination for the exported pipeline variables
/// * `options` - Run options
pub fn run(
    config: &Config,
    service: &dyn BuildService,
    sink: &dyn VariableSink,
    options: &PipelineOptions,
) -> Result<PipelineOutcome> {
    let version = Version::parse(&config.release_tag)?;

    let target_binary = TargetBinaryRange::compute(&version)?;

    let payload = service.fetch_build_history(&config.app_slug)?;
    let decision = ReleaseDecision::evaluate(&version, &payload, options.filter_mode)?;

    let ctx = NotesContext::new(config, &version);
    let template_source = options
        .template_source
        .as_deref()
        .unwrap_or(notes::DEFAULT_TEMPLATE);
    let html = notes::render(template_source, &ctx)?;

    let filename = notes::output_filename(&config.app_name, &version);
    let notes_path = options.output_dir.join(&filename);
    if options.write_notes {
        fs::write(&notes_path, &html)?;
    }

    let variables = PipelineVariables {
        target_binary: target_binary.to_string(),
        generated_html_fn: filename,
        decision,
    };
    export::export_outputs(sink, &variables)?;

    Ok(PipelineOutcome {
        version,
        target_binary,
        decision,
        notes_path,
        variables,
    })
}
