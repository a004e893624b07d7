//! 覆盖度评分服务（权重 0.25）
//!
//! 衡量内容的广度和深度，结果不超过 1.0

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{Dimension, DimensionScore, FormatCategory};
use crate::services::{patterns, structure, text_metrics, DimensionScorer};

/// 覆盖度评分器
#[derive(Debug, Default, Clone, Copy)]
pub struct CoverageScorer;

impl DimensionScorer for CoverageScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Coverage
    }

    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore {
        let (score, issues) = match format {
            FormatCategory::Structured => measure_structured(content),
            FormatCategory::Code => measure_code(content),
            FormatCategory::Markup => measure_markup(content),
            FormatCategory::PlainText => measure_text(content),
        };

        DimensionScore::new(
            self.dimension(),
            score.min(1.0),
            text_metrics::join_feedback(&issues, self.dimension().clear_marker()),
        )
    }
}

fn measure_structured(content: &str) -> (f64, Vec<String>) {
    let data = match structure::parse(content) {
        Ok(data) => data,
        Err(_) => {
            return (
                0.0,
                vec!["Cannot measure coverage of invalid JSON".to_string()],
            )
        }
    };

    let score = match &data {
        Value::Object(map) => {
            let key_score = (map.len() as f64 / 10.0).min(1.0);
            let depth_score = (structure::nesting_depth(&data) as f64 / 5.0).min(1.0);
            (key_score + depth_score) / 2.0
        }
        Value::Array(items) => (items.len() as f64 / 10.0).min(1.0),
        _ => 0.5,
    };
    (score, Vec::new())
}

fn measure_code(content: &str) -> (f64, Vec<String>) {
    let functions = patterns::function_keyword().find_iter(content).count();
    let classes = patterns::class_keyword().find_iter(content).count();
    let variables = patterns::variable_declaration().find_iter(content).count();

    let total = functions as f64 + classes as f64 * 2.0 + variables as f64 / 5.0;
    let score = (total / 10.0).min(1.0);

    let mut issues = Vec::new();
    if functions == 0 && classes == 0 {
        issues.push("No functions or classes found".to_string());
    }
    (score, issues)
}

fn measure_markup(content: &str) -> (f64, Vec<String>) {
    let sections = patterns::heading().find_iter(content).count();
    let links = patterns::inline_link().find_iter(content).count();
    let images = patterns::image().find_iter(content).count();
    let code_blocks = content.matches("```").count() / 2;

    let total = sections as f64 + links as f64 / 2.0 + images as f64 + code_blocks as f64;
    ((total / 8.0).min(1.0), Vec::new())
}

fn measure_text(content: &str) -> (f64, Vec<String>) {
    let lowered = content.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();

    let diversity = unique.len() as f64 / words.len().max(1) as f64;
    let length_score = (words.len() as f64 / 200.0).min(1.0);
    let score = (diversity + length_score) / 2.0;

    let mut issues = Vec::new();
    if diversity < 0.3 {
        issues.push("Low vocabulary diversity".to_string());
    }
    (score, issues)
}
