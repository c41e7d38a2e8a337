// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `calorie batch` command: score uploaded CSV tables.
//!
//! Each input file is an independent request. A file that fails validation
//! or prediction is reported and the remaining files still run; the command
//! exits non-zero if any file failed.

use anyhow::Context;
use feature_table::OUTPUT_FILE_NAME;
use predictor::{BatchPrediction, CaloriePredictor, PredictorConfig, Ready};
use std::path::{Path, PathBuf};

/// Rows shown in the terminal preview.
const PREVIEW_ROWS: usize = 10;

pub async fn execute(
    config: PredictorConfig,
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    if output.is_some() && files.len() > 1 {
        anyhow::bail!("--output takes a single input file; use --output-dir for several");
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            calorie · Batch Predictor                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let predictor = super::load_predictor(config)?;
    let delimiter = predictor.config().delimiter_byte()?;

    if let Some(dir) = &output_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create '{}'", dir.display()))?;
    }

    let mut failed = 0;
    for file in &files {
        let destination = output_path(file, output.as_deref(), output_dir.as_deref(), files.len());
        println!("  {}", file.display());

        match process_file(&predictor, file, &destination, delimiter).await {
            Ok(batch) => {
                print_preview(&batch);
                println!("   {}", batch.metrics.summary());
                println!(
                    "   ✓ {} rows, mean {:.2} kcal → {}",
                    batch.len(),
                    batch.mean_calories(),
                    destination.display()
                );
            }
            Err(e) => {
                failed += 1;
                tracing::error!("{}: {e:#}", file.display());
                println!("   ✗ {e:#}");
            }
        }
        println!();
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files failed", files.len());
    }
    Ok(())
}

async fn process_file(
    predictor: &CaloriePredictor<Ready>,
    file: &Path,
    destination: &Path,
    delimiter: u8,
) -> anyhow::Result<BatchPrediction> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read '{}'", file.display()))?;
    let batch = predictor.predict_csv(bytes.as_slice())?;
    let csv = batch.to_csv_bytes(delimiter)?;
    tokio::fs::write(destination, csv)
        .await
        .with_context(|| format!("failed to write '{}'", destination.display()))?;
    Ok(batch)
}

/// Where the scored copy of `input` is written.
///
/// A lone input without `--output-dir` gets the standard download name.
fn output_path(
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    num_inputs: usize,
) -> PathBuf {
    if let Some(path) = output {
        return path.to_path_buf();
    }
    let per_file = || {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        PathBuf::from(format!("{stem}_predictions.csv"))
    };
    match output_dir {
        Some(dir) => dir.join(per_file()),
        None if num_inputs == 1 => PathBuf::from(OUTPUT_FILE_NAME),
        None => per_file(),
    }
}

fn print_preview(batch: &BatchPrediction) {
    println!(
        "   {:<4} {:<7} {:>4} {:>7} {:>7} {:>8} {:<12} {:>10}",
        "Row", "Gender", "Age", "Height", "Weight", "BMI", "Category", "Calories",
    );
    println!("   {}", "-".repeat(66));

    for (i, (subject, row)) in batch
        .table()
        .subjects()
        .iter()
        .zip(batch.rows())
        .take(PREVIEW_ROWS)
        .enumerate()
    {
        println!(
            "   {:<4} {:<7} {:>4} {:>7.1} {:>7.1} {:>8.2} {:<12} {:>10.2}",
            i + 1,
            subject.gender,
            subject.age,
            subject.height_cm,
            subject.weight_kg,
            row.bmi,
            row.bmi_category,
            row.predicted_calories,
        );
    }
    if batch.len() > PREVIEW_ROWS {
        println!("   ... {} more rows", batch.len() - PREVIEW_ROWS);
    }
}
