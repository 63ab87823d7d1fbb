//! Inspect command: operator view of the model artifact.

use crate::error::{CliError, Result};
use crate::output;
use sabor::features::FEATURE_NAMES;
use sabor::model::ModelHandle;
use sabor::serialization::SbrMetadata;
use serde::Serialize;

/// Machine-readable artifact summary for `inspect --json`.
#[derive(Serialize)]
struct InspectReport<'a> {
    file: String,
    format: &'static str,
    n_features: usize,
    intercept: f32,
    coefficients: &'a [f32],
    metadata: &'a SbrMetadata,
}

pub(crate) fn run(handle: &ModelHandle, json: bool) -> Result<()> {
    let model = handle
        .get()
        .map_err(|e| CliError::ModelLoadFailed(e.to_string()))?;

    if json {
        let report = InspectReport {
            file: handle.path().display().to_string(),
            format: "SBR1",
            n_features: model.n_features(),
            intercept: model.intercept(),
            coefficients: model.coefficients(),
            metadata: model.metadata(),
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Serialization(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    output::section("Model Artifact");
    output::kv("File", handle.path().display());
    output::kv("Format", "SBR1");
    output::kv("Features", model.n_features());
    output::kv("Intercept", model.intercept());

    if !model.metadata().is_empty() {
        output::section("Metadata");
        for (key, value) in model.metadata() {
            output::kv(key, value);
        }
    }

    output::section("Coefficients");
    for (name, coefficient) in FEATURE_NAMES.iter().zip(model.coefficients()) {
        output::kv(name, coefficient);
    }
    Ok(())
}
