// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end prediction pipeline.
//!
//! These tests exercise the complete flow from CSV upload → validation →
//! feature rows → model → squared output → CSV download, proving that the
//! four library crates compose correctly.

use body_metrics::{BmiCategory, Gender, SubjectRecord};
use calorie_model::{ModelError, ModelLoader, Regressor};
use feature_table::{SubjectTable, TableError, TableOptions, SAMPLE_CSV};
use predictor::{CaloriePredictor, PredictorConfig, PredictorError, Ready};
use std::path::PathBuf;
use std::sync::Arc;

// ── Helpers ────────────────────────────────────────────────────

/// Two boosted stumps: Duration (column 4) and Male indicator (column 0).
///
/// Raw score = 10 + (2 if Duration <= 30 else 6) + (1 if Male else -1).
const STUMPS_JSON: &str = r#"{
    "name": "stumps",
    "target_transform": "sqrt",
    "features": ["Gender","Age","Height","Weight","Duration","Heart_Rate","Body_Temp","BMI","BMI_Category"],
    "encoders": [
        { "column": "Gender", "kind": "one_hot", "categories": ["Female","Male"], "drop": "Female" },
        { "column": "Age", "kind": "numeric" },
        { "column": "Height", "kind": "numeric" },
        { "column": "Weight", "kind": "numeric" },
        { "column": "Duration", "kind": "numeric" },
        { "column": "Heart_Rate", "kind": "numeric" },
        { "column": "Body_Temp", "kind": "numeric" },
        { "column": "BMI", "kind": "numeric" },
        { "column": "BMI_Category", "kind": "one_hot",
          "categories": ["Normal","Obese","Overweight","Underweight"], "drop": "Normal" }
    ],
    "estimator": {
        "kind": "tree_ensemble",
        "aggregation": "sum",
        "init": 10.0,
        "learning_rate": 1.0,
        "trees": [
            { "nodes": [
                { "feature": 4, "threshold": 30.0, "left": 1, "right": 2 },
                { "value": 2.0 },
                { "value": 6.0 }
            ] },
            { "nodes": [
                { "feature": 0, "threshold": 0.5, "left": 1, "right": 2 },
                { "value": -1.0 },
                { "value": 1.0 }
            ] }
        ]
    }
}"#;

fn stumps_predictor(config: PredictorConfig) -> CaloriePredictor<Ready> {
    let model = ModelLoader::from_json(STUMPS_JSON).unwrap();
    CaloriePredictor::from_regressor(config, Arc::new(model))
}

fn shipped_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/calorie_predictor.json")
}

fn reference_subject() -> SubjectRecord {
    SubjectRecord {
        gender: Gender::Male,
        age: 30,
        height_cm: 175.0,
        weight_kg: 70.0,
        duration_min: 30,
        heart_rate_bpm: 120,
        body_temp_c: 39.5,
    }
}

// ── End-to-end ─────────────────────────────────────────────────

#[test]
fn test_sample_csv_end_to_end() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let batch = predictor.predict_csv(SAMPLE_CSV.as_bytes()).unwrap();

    assert_eq!(batch.len(), 3);
    assert_eq!(batch.calories().collect::<Vec<_>>(), vec![289.0, 121.0, 169.0]);

    let csv = String::from_utf8(batch.to_csv_bytes(b',').unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp,BMI,BMI_Category,Predicted_Calories"
    );
    assert!(lines[1].starts_with("Male,25,175,70,45,120,38,22.857142857"));
    assert!(lines[1].ends_with(",Normal,289"));
    assert!(lines[2].starts_with("Female,30,160,60,30,105,37.8,23.43"));
    assert!(lines[2].ends_with(",Normal,121"));
    assert!(lines[3].starts_with("Male,40,180,85,20,95,37.2,26.23"));
    assert!(lines[3].ends_with(",Overweight,169"));
}

#[test]
fn test_output_csv_reparses_with_original_columns() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let batch = predictor.predict_csv(SAMPLE_CSV.as_bytes()).unwrap();
    let bytes = batch.to_csv_bytes(b',').unwrap();

    // The download is itself a valid upload: extra columns are echoed.
    let again = SubjectTable::from_reader(bytes.as_slice(), &TableOptions::default()).unwrap();
    assert_eq!(again.subjects(), batch.table().subjects());
    assert_eq!(again.headers().len(), 10);
}

#[test]
fn test_rescoring_a_download_overwrites_output_columns() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let first = predictor
        .predict_csv(SAMPLE_CSV.as_bytes())
        .unwrap()
        .to_csv_bytes(b',')
        .unwrap();
    let second = predictor
        .predict_csv(first.as_slice())
        .unwrap()
        .to_csv_bytes(b',')
        .unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(second).unwrap();
    assert_eq!(
        text.lines().next().unwrap(),
        "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp,BMI,BMI_Category,Predicted_Calories"
    );
}

#[test]
fn test_single_and_one_row_batch_agree() {
    let predictor = CaloriePredictor::new(PredictorConfig {
        model_path: shipped_model_path(),
        ..Default::default()
    })
    .load_model()
    .unwrap();

    let subject = reference_subject();
    let single = predictor.predict_one(&subject).unwrap();
    let batch = predictor
        .predict_table(&SubjectTable::from_subjects(vec![subject]))
        .unwrap();

    assert_eq!(
        single.calories_display(),
        format!("{:.2}", batch.rows()[0].predicted_calories)
    );
    assert_eq!(single.bmi_display(), "22.86");
    assert_eq!(single.category, BmiCategory::Normal);
    assert_eq!(single.advice, "✅ Healthy BMI range. Keep it up!");
    assert!(single.calories > 0.0 && single.calories < 2000.0);
}

#[test]
fn test_batch_preserves_row_count_and_order() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let subjects: Vec<SubjectRecord> = (0..50)
        .map(|i| SubjectRecord {
            gender: if i % 2 == 0 { Gender::Male } else { Gender::Female },
            duration_min: 1 + i,
            ..Default::default()
        })
        .collect();
    let table = SubjectTable::from_subjects(subjects.clone());
    let batch = predictor.predict_table(&table).unwrap();

    assert_eq!(batch.len(), subjects.len());
    for (subject, calories) in subjects.iter().zip(batch.calories()) {
        let expected = predictor.predict_one(subject).unwrap().calories;
        assert_eq!(calories, expected);
    }
}

// ── Validation ─────────────────────────────────────────────────

#[test]
fn test_missing_heart_rate_is_rejected() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let csv = "Gender,Age,Height,Weight,Duration,Body_Temp\nMale,25,175,70,45,38\n";
    let err = predictor.predict_csv(csv.as_bytes()).unwrap_err();
    match err {
        PredictorError::TableError(TableError::MissingColumns(cols)) => {
            assert_eq!(cols, vec!["Heart_Rate".to_string()]);
        }
        other => panic!("expected missing column error, got {other:?}"),
    }
}

#[test]
fn test_out_of_domain_row_rejects_whole_table() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let csv = "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n\
               Male,25,175,70,45,120,38\n\
               Female,30,160,600,30,105,37.8\n";
    assert!(matches!(
        predictor.predict_csv(csv.as_bytes()),
        Err(PredictorError::TableError(TableError::InvalidRows(_)))
    ));
}

#[test]
fn test_lenient_config_scores_out_of_domain_rows() {
    let predictor = stumps_predictor(PredictorConfig {
        strict_bounds: false,
        ..Default::default()
    });
    let csv = "Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n\
               Female,30,160,600,30,105,37.8\n";
    let batch = predictor.predict_csv(csv.as_bytes()).unwrap();
    assert_eq!(batch.rows()[0].bmi_category, BmiCategory::Obese);
}

#[test]
fn test_semicolon_delimiter_round_trip() {
    let predictor = stumps_predictor(PredictorConfig {
        delimiter: ';',
        ..Default::default()
    });
    let csv = SAMPLE_CSV.replace(',', ";");
    let batch = predictor.predict_csv(csv.as_bytes()).unwrap();
    let out = String::from_utf8(batch.to_csv_bytes(b';').unwrap()).unwrap();
    assert!(out.lines().next().unwrap().ends_with(";BMI;BMI_Category;Predicted_Calories"));
}

// ── Prediction-time failures ───────────────────────────────────

#[test]
fn test_unknown_category_is_recoverable() {
    // A model trained without any Female rows.
    let json = STUMPS_JSON.replace(
        r#""categories": ["Female","Male"], "drop": "Female""#,
        r#""categories": ["Male"]"#,
    );
    let model = ModelLoader::from_json(&json).unwrap();
    assert_eq!(model.name(), "stumps");
    let predictor = CaloriePredictor::from_regressor(PredictorConfig::default(), Arc::new(model));

    let female = SubjectRecord {
        gender: Gender::Female,
        ..reference_subject()
    };
    assert!(matches!(
        predictor.predict_one(&female),
        Err(PredictorError::ModelError(ModelError::UnknownCategory { .. }))
    ));

    // The same loaded model keeps serving.
    let male = predictor.predict_one(&reference_subject()).unwrap();
    assert_eq!(male.calories, 169.0);
}

#[test]
fn test_unloadable_model_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = CaloriePredictor::new(PredictorConfig {
        model_path: path,
        ..Default::default()
    })
    .load_model();
    assert!(matches!(
        result,
        Err(PredictorError::ModelError(ModelError::ParseError(_)))
    ));
}

#[test]
fn test_single_prediction_json_shape() {
    let predictor = stumps_predictor(PredictorConfig::default());
    let out = predictor.predict_one(&reference_subject()).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["calories"], 169.0);
    assert_eq!(json["category"], "Normal");
    assert!(json["bmi"].as_f64().unwrap() > 22.85);
}
