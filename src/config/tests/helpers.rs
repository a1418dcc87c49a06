//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::LabelerConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose a [`LabelerConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> LabelerConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    LabelerConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Environment variables a runner may export for the four label inputs.
pub const ACTION_INPUT_VARS: [&str; 8] = [
    "INPUT_ONE-APPROVAL-LABEL-NAME",
    "INPUT_TWO-APPROVALS-LABEL-NAME",
    "INPUT_CHANGES-REQUESTED-LABEL-NAME",
    "INPUT_UPDATED-PR-LABEL-NAME",
    "INPUT_ONE_APPROVAL_LABEL_NAME",
    "INPUT_TWO_APPROVALS_LABEL_NAME",
    "INPUT_CHANGES_REQUESTED_LABEL_NAME",
    "INPUT_UPDATED_PR_LABEL_NAME",
];
