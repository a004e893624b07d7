//! 格式规范评分服务（权重 0.20）
//!
//! 从 1.0 开始按问题扣分，最低为 0

use crate::models::{Dimension, DimensionScore, FormatCategory};
use crate::services::{patterns, structure, text_metrics, DimensionScorer};

/// 格式规范评分器
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatComplianceScorer;

impl DimensionScorer for FormatComplianceScorer {
    fn dimension(&self) -> Dimension {
        Dimension::FormatCompliance
    }

    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore {
        let (score, issues) = match format {
            FormatCategory::Structured => check_structured(content),
            FormatCategory::Markup => check_markup(content),
            FormatCategory::Code => check_code(content),
            FormatCategory::PlainText => check_text(content),
        };

        DimensionScore::new(
            self.dimension(),
            score.max(0.0),
            text_metrics::join_feedback(&issues, self.dimension().clear_marker()),
        )
    }
}

fn check_structured(content: &str) -> (f64, Vec<String>) {
    if let Err(e) = structure::parse(content) {
        return (
            0.0,
            vec![format!("JSON parse error: {}", structure::error_preview(&e))],
        );
    }

    let mut score = 1.0;
    let mut issues = Vec::new();
    if content.contains('\n') && !content.starts_with("{\n") {
        score -= 0.1;
        issues.push("Consider using consistent formatting".to_string());
    }
    (score, issues)
}

fn check_markup(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();

    if patterns::heading_without_space().is_match(content) {
        score -= 0.2;
        issues.push("Headers need space after #".to_string());
    }

    if content.matches("```").count() % 2 != 0 {
        score -= 0.3;
        issues.push("Unclosed code block".to_string());
    }

    if patterns::empty_link().is_match(content) {
        score -= 0.1;
        issues.push("Empty links found".to_string());
    }

    (score, issues)
}

fn check_code(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();
    let lines = text_metrics::lines(content);

    let mut uses_spaces = false;
    let mut uses_tabs = false;
    for line in &lines {
        if line.starts_with("    ") {
            uses_spaces = true;
        } else if line.starts_with('\t') {
            uses_tabs = true;
        }
    }
    if uses_spaces && uses_tabs {
        score -= 0.2;
        issues.push("Mixed tabs and spaces".to_string());
    }

    let trailing = lines.iter().filter(|line| line.ends_with(' ')).count();
    if trailing as f64 > lines.len() as f64 * 0.1 {
        score -= 0.1;
        issues.push("Trailing whitespace detected".to_string());
    }

    (score, issues)
}

fn check_text(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();

    if content.contains("  ") {
        score -= 0.1;
        issues.push("Multiple consecutive spaces".to_string());
    }

    let sentences = text_metrics::piece_count(content, patterns::sentence_mark());
    if sentences > 1 {
        let proper_endings = patterns::capitalized_sentence_start()
            .find_iter(content)
            .count();
        if (proper_endings as f64) < sentences as f64 * 0.5 {
            score -= 0.1;
            issues.push("Inconsistent sentence endings".to_string());
        }
    }

    (score, issues)
}
