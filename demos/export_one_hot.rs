//! One-hot encoder export walkthrough
//!
//! Loads two fitted encoders from their stored parameters (the "origin" and
//! "cylinders" columns of the Auto MPG dataset), expands each into binary
//! indicator features and prints the resulting category domains.
//!
//! Run with: RUST_LOG=debug cargo run --example export_one_hot

use onehot_export::{
    parse_invalid_value_treatment, FeatureEncoder, IndexedCategoryFeature, InputFeature,
    OneHotEncoder, ParameterSnapshot, RawNumericFeature, ValueSpaceRegistry,
};
use serde_json::json;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn snapshot(value: serde_json::Value) -> Result<ParameterSnapshot, Box<dyn Error>> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(format!("snapshot must be an object, got {}", other).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = ValueSpaceRegistry::new();

    // origin: 1=American, 2=European, 3=Japanese, decorated with labels upstream
    let origin = OneHotEncoder::from_snapshot(&snapshot(json!({
        "n_values": "auto",
        "n_values_": [4],
        "active_features_": [1, 2, 3],
    }))?)?;
    let origin_input = [InputFeature::from(IndexedCategoryFeature::new(
        "origin",
        ["unknown", "american", "european", "japanese"],
    ))];

    // cylinders: fitted with an explicit count, passed through as raw numbers
    let cylinders = OneHotEncoder::from_snapshot(&snapshot(json!({
        "n_values": 9,
        "n_values_": [9],
    }))?)?;
    let cylinders_input = [InputFeature::from(RawNumericFeature::new("cylinders"))];

    let origin_features =
        origin.encode_features(&["origin".to_string()], &origin_input, &mut registry)?;
    let cylinder_features =
        cylinders.encode_features(&["cylinders".to_string()], &cylinders_input, &mut registry)?;

    println!("=== Indicator features ===");
    for feature in origin_features.iter().chain(cylinder_features.iter()) {
        println!(
            "  {} == {:?} ({})",
            feature.name(),
            feature.value(),
            feature.data_type()
        );
    }

    println!("\n=== Registered domains ===");
    for (name, categories) in registry.iter() {
        println!("  {}: {:?}", name, categories);
    }

    let policy = parse_invalid_value_treatment("as_missing")?;
    println!("\nInvalid values in decorated fields are treated {}", policy);

    Ok(())
}
