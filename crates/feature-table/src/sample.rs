// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The downloadable sample upload.

/// A three-row example of the batch input format.
pub const SAMPLE_CSV: &str = "\
Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp
Male,25,175,70,45,120,38
Female,30,160,60,30,105,37.8
Male,40,180,85,20,95,37.2
";

/// Suggested file name for [`SAMPLE_CSV`].
pub const SAMPLE_FILE_NAME: &str = "sample.csv";

/// Default file name for exported predictions.
pub const OUTPUT_FILE_NAME: &str = "calorie_predictions.csv";
