// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # body-metrics
//!
//! The deterministic domain logic underneath calorie prediction:
//!
//! - [`calculate_bmi`]: body-mass index from weight (kg) and height (cm).
//! - [`BmiCategory`]: the four ordinal BMI bands and their advice text.
//! - [`SubjectRecord`]: one subject's demographic and workout inputs,
//!   with domain validation against [`FieldBounds`].
//!
//! Everything here is pure. This crate sits at the bottom of the workspace
//! and depends on nothing but `serde`/`thiserror`.
//!
//! # Example
//! ```
//! use body_metrics::{calculate_bmi, BmiCategory};
//!
//! let bmi = calculate_bmi(70.0, 175.0);
//! let category = BmiCategory::from_bmi(bmi);
//! assert_eq!(category, BmiCategory::Normal);
//! assert_eq!(category.advice(), "✅ Healthy BMI range. Keep it up!");
//! ```

mod bmi;
mod category;
mod error;
mod subject;

pub use bmi::calculate_bmi;
pub use category::BmiCategory;
pub use error::MetricsError;
pub use subject::{FieldBounds, Gender, SubjectRecord};
