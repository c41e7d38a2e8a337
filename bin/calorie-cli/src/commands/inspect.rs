// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `calorie inspect` command: display the model artifact.
//!
//! Prints the feature encoders with their encoded widths and the estimator
//! that consumes them.

use anyhow::Context;
use calorie_model::{ModelLoader, Regressor};
use predictor::PredictorConfig;

pub async fn execute(config: PredictorConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             calorie · Model Inspector               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let path = &config.model_path;
    let model = ModelLoader::load(path)
        .with_context(|| format!("failed to load model from '{}'", path.display()))?;

    // ── Summary ────────────────────────────────────────────────
    println!("  Model:       {}", model.name());
    if let Some(description) = model.description() {
        println!("  About:       {description}");
    }
    println!("  Path:        {}", path.display());
    println!("  Transform:   {}", model.target_transform());
    println!("  Estimator:   {}", model.estimator().describe());
    println!("  Input width: {}", model.encoder().width());
    println!();

    // ── Encoders ───────────────────────────────────────────────
    println!("  {:<4} {:<14} {:<10} {:>6}   {}", "Idx", "Column", "Kind", "Width", "Columns");
    println!("  {}", "-".repeat(60));

    let mut offset = 0;
    for (i, spec) in model.encoder().specs().iter().enumerate() {
        let width = spec.width();
        let span = if width == 0 {
            "-".to_string()
        } else {
            format!("{}..{}", offset, offset + width)
        };
        println!(
            "  {:<4} {:<14} {:<10} {:>6}   {}",
            i,
            spec.column(),
            spec.kind(),
            width,
            span,
        );
        offset += width;
    }
    println!();
    Ok(())
}
