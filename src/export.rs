//! Pipeline variable export
//!
//! Decision outputs are handed to the surrounding pipeline as key/value
//! variables. The sink is an injected capability with two runtime
//! implementations: the real `envman` exporter used inside CI, and a
//! log-only variant for local runs. [MemorySink] records pairs for tests.

use std::process::Command;
use std::sync::Mutex;

use crate::error::{ReleaseGateError, Result};
use crate::promotion::ReleaseDecision;

/// Sink for variables handed to the surrounding pipeline
pub trait VariableSink: Send + Sync {
    /// Set one pipeline variable
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Real exporter, shells out to `envman add`
///
/// See: https://github.com/bitrise-io/envman
pub struct EnvmanSink;

impl VariableSink for EnvmanSink {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let status = Command::new("envman")
            .args(["add", "--key", key, "--value", value])
            .status()
            .map_err(|e| ReleaseGateError::export(format!("could not run envman: {}", e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ReleaseGateError::export(format!(
                "envman add --key {} exited with {}",
                key, status
            )))
        }
    }
}

/// Log-only exporter for non-CI runs, prints the command it would run
pub struct LogOnlySink;

impl VariableSink for LogOnlySink {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        println!("envman add --key {} --value '{}'", key, value);
        Ok(())
    }
}

/// Recording sink for tests
#[derive(Default)]
pub struct MemorySink {
    values: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything set so far, in order
    pub fn values(&self) -> Vec<(String, String)> {
        self.values.lock().expect("sink mutex poisoned").clone()
    }

    /// Look up the last value set for a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.values()
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl VariableSink for MemorySink {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("sink mutex poisoned")
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Fully computed pipeline outputs, ready to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineVariables {
    pub target_binary: String,
    pub generated_html_fn: String,
    pub decision: ReleaseDecision,
}

/// Export the computed outputs through a sink
///
/// `PROMOTE_APP` is only ever set (to `TRUE`) when promotion was decided;
/// it is never exported with a false-y value. Callers must only invoke this
/// once every output has been computed, so a failure earlier in the pipeline
/// never leaves a partial export behind.
pub fn export_outputs(sink: &dyn VariableSink, vars: &PipelineVariables) -> Result<()> {
    sink.set("TARGET_BINARY", &vars.target_binary)?;
    sink.set("GENERATED_HTML_FN", &vars.generated_html_fn)?;
    if vars.decision.should_promote {
        sink.set("PROMOTE_APP", "TRUE")?;
    }
    Ok(())
}
