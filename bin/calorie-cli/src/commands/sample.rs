// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `calorie sample` command: the template upload.

use anyhow::Context;
use feature_table::{SAMPLE_CSV, SAMPLE_FILE_NAME};
use std::path::PathBuf;

pub async fn execute(output: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(mut path) = output else {
        print!("{SAMPLE_CSV}");
        return Ok(());
    };

    if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
        path.push(SAMPLE_FILE_NAME);
    }
    tokio::fs::write(&path, SAMPLE_CSV)
        .await
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("  Sample written to {}", path.display());
    Ok(())
}
