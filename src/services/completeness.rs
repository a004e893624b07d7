//! 完整性评分服务（权重 0.30）
//!
//! 检查提交内容是否具备该格式应有的组成部分

use serde_json::Value;

use crate::models::{Dimension, DimensionScore, FormatCategory};
use crate::services::{patterns, structure, text_metrics, DimensionScorer};

/// JSON 映射中期望出现的常见字段
const CANONICAL_FIELDS: [&str; 5] = ["id", "name", "data", "value", "type"];

/// 反馈中最多列出的缺失项
const MAX_LISTED_MISSING: usize = 3;

/// 纯文本低于该词数时提示篇幅过短
const BRIEF_WORD_COUNT: usize = 50;

/// 完整性评分器
#[derive(Debug, Default, Clone, Copy)]
pub struct CompletenessScorer;

impl DimensionScorer for CompletenessScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Completeness
    }

    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore {
        let (score, issues) = match format {
            FormatCategory::Structured => score_structured(content),
            FormatCategory::Markup => score_markup(content),
            FormatCategory::Code => score_code(content),
            FormatCategory::PlainText => score_text(content),
        };

        DimensionScore::new(
            self.dimension(),
            score,
            text_metrics::join_feedback(&issues, self.dimension().clear_marker()),
        )
    }
}

fn score_structured(content: &str) -> (f64, Vec<String>) {
    let data = match structure::parse(content) {
        Ok(data) => data,
        Err(_) => return (0.0, vec!["Invalid JSON structure".to_string()]),
    };

    match data {
        Value::Object(map) => {
            let missing: Vec<&str> = CANONICAL_FIELDS
                .iter()
                .copied()
                .filter(|field| !map.contains_key(*field))
                .collect();
            let found = CANONICAL_FIELDS.len() - missing.len();
            let score = found as f64 / CANONICAL_FIELDS.len() as f64;

            let mut issues = Vec::new();
            if !missing.is_empty() {
                issues.push(format!(
                    "Missing common fields: {}",
                    list_first(&missing)
                ));
            }
            (score, issues)
        }
        Value::Array(items) if items.is_empty() => (0.0, vec!["Empty array".to_string()]),
        Value::Array(_) => (1.0, Vec::new()),
        _ => (0.5, vec!["JSON structure is minimal".to_string()]),
    }
}

fn score_markup(content: &str) -> (f64, Vec<String>) {
    let elements = [
        ("header", patterns::heading().is_match(content)),
        ("paragraph", content.contains("\n\n")),
        ("list", patterns::bullet_item().is_match(content)),
        ("link", patterns::inline_link().is_match(content)),
        ("code", content.contains("```")),
    ];
    presence_score(&elements)
}

fn score_code(content: &str) -> (f64, Vec<String>) {
    let checks = [
        ("structure", text_metrics::lines(content).len() > 5),
        ("functions", patterns::function_keyword().is_match(content)),
        ("comments", patterns::comment_marker().is_match(content)),
        ("returns", patterns::return_keyword().is_match(content)),
    ];
    presence_score(&checks)
}

fn score_text(content: &str) -> (f64, Vec<String>) {
    let words = text_metrics::word_count(content);
    let sentences = text_metrics::piece_count(content, patterns::sentence_run());
    let paragraphs = text_metrics::paragraphs(content).count();

    let word_score = (words as f64 / 100.0).min(1.0);
    let sentence_score = (sentences as f64 / 5.0).min(1.0);
    let paragraph_score = (paragraphs as f64 / 2.0).min(1.0);
    let score = (word_score + sentence_score + paragraph_score) / 3.0;

    let mut issues = Vec::new();
    if words < BRIEF_WORD_COUNT {
        issues.push("Content seems brief, consider expanding".to_string());
    }
    (score, issues)
}

/// 按存在项比例打分，并列出前几个缺失项
fn presence_score(checks: &[(&str, bool)]) -> (f64, Vec<String>) {
    let present = checks.iter().filter(|(_, ok)| *ok).count();
    let score = present as f64 / checks.len() as f64;

    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, ok)| !*ok)
        .map(|(name, _)| *name)
        .collect();

    let mut issues = Vec::new();
    if !missing.is_empty() {
        issues.push(format!("Consider adding: {}", list_first(&missing)));
    }
    (score, issues)
}

fn list_first(names: &[&str]) -> String {
    names
        .iter()
        .take(MAX_LISTED_MISSING)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
