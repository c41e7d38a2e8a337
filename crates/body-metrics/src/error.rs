// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for subject parsing and validation.

/// Errors raised while parsing or validating subject inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// A field value lies outside its documented domain.
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A field value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// An integer field was given a fractional value.
    #[error("{field} must be a whole number, got {value}")]
    NotIntegral { field: &'static str, value: String },

    /// A whole-number field holds a value no subject record can store
    /// (negative, or beyond `u32`). Rejected even with lenient bounds.
    #[error("{field} = {value} cannot be represented as a whole number of units")]
    Unrepresentable { field: &'static str, value: String },

    /// A numeric field could not be parsed at all.
    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// The gender string is not one of the recognised labels.
    #[error("unrecognised gender '{0}'; expected 'Male' or 'Female'")]
    InvalidGender(String),

    /// The BMI category label is not one of the four known bands.
    #[error("unrecognised BMI category '{0}'")]
    InvalidCategory(String),
}
