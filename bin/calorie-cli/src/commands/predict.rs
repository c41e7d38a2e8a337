// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `calorie predict` command: score a single workout.
//!
//! ```text
//! CaloriePredictor<Unloaded> → load_model → <Ready> → predict_one
//! ```

use anyhow::Context;
use body_metrics::SubjectRecord;
use predictor::PredictorConfig;

pub async fn execute(config: PredictorConfig, subject: SubjectRecord, json: bool) -> anyhow::Result<()> {
    let predictor = super::load_predictor(config)?;
    let result = predictor
        .predict_one(&subject)
        .context("prediction failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            calorie · Burn Predictor                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Inputs ─────────────────────────────────────────────────
    println!("  Inputs:");
    println!("   Gender:      {}", subject.gender);
    println!("   Age:         {} years", subject.age);
    println!("   Height:      {} cm", subject.height_cm);
    println!("   Weight:      {} kg", subject.weight_kg);
    println!("   Duration:    {} min", subject.duration_min);
    println!("   Heart rate:  {} bpm", subject.heart_rate_bpm);
    println!("   Body temp:   {} °C", subject.body_temp_c);
    println!();

    // ── Result ─────────────────────────────────────────────────
    for line in result.to_string().lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}
