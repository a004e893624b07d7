//! 有效性评分服务（权重 0.10）
//!
//! 检查逻辑一致性和常见错误，从 1.0 开始扣分

use phf::phf_set;

use crate::models::{Dimension, DimensionScore, FormatCategory};
use crate::services::{patterns, structure, text_metrics, DimensionScorer};

/// 常见拼写错误（小写）
static COMMON_MISSPELLINGS: phf::Set<&'static str> = phf_set! {
    "teh",
    "adn",
    "taht",
    "wiht",
};

/// 空值最多扣分次数
const MAX_EMPTY_PENALTIES: usize = 5;

/// 最多检查的 import 数量
const MAX_CHECKED_IMPORTS: usize = 5;

/// 有效性评分器
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidityScorer;

impl DimensionScorer for ValidityScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Validity
    }

    fn evaluate(&self, content: &str, format: FormatCategory) -> DimensionScore {
        let (score, issues) = match format {
            FormatCategory::Structured => check_structured(content),
            FormatCategory::Code => check_code(content),
            FormatCategory::Markup => check_markup(content),
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
    let data = match structure::parse(content) {
        Ok(data) => data,
        Err(e) => {
            return (
                0.0,
                vec![format!("Invalid JSON: {}", structure::error_preview(&e))],
            )
        }
    };

    let empty_count = structure::count_empty_values(&data);
    if empty_count == 0 {
        return (1.0, Vec::new());
    }

    let penalty = 0.1 * empty_count.min(MAX_EMPTY_PENALTIES) as f64;
    (
        1.0 - penalty,
        vec![format!("Found {} null/empty values", empty_count)],
    )
}

fn check_code(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();

    let opening = content
        .chars()
        .filter(|c| matches!(c, '(' | '[' | '{'))
        .count();
    let closing = content
        .chars()
        .filter(|c| matches!(c, ')' | ']' | '}'))
        .count();
    if opening != closing {
        score -= 0.3;
        issues.push("Mismatched brackets".to_string());
    }

    if patterns::empty_block().is_match(content) {
        score -= 0.1;
        issues.push("Empty code blocks".to_string());
    }

    for name in unused_imports(content) {
        score -= 0.05;
        issues.push(format!("Potentially unused: {}", name));
    }

    (score, issues)
}

/// 前几个 import 的名字中，首次出现之后再也没有出现的那些
///
/// 只做子串查找，不做真正的引用分析
fn unused_imports(content: &str) -> Vec<&str> {
    patterns::imported_name()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .take(MAX_CHECKED_IMPORTS)
        .filter(|name| match content.find(name) {
            Some(first) => !content[first + name.len()..].contains(name),
            None => true,
        })
        .collect()
}

fn check_markup(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();

    if content.matches("**").count() % 2 != 0 {
        score -= 0.2;
        issues.push("Unclosed bold formatting".to_string());
    }

    if patterns::unterminated_link().is_match(content) {
        score -= 0.2;
        issues.push("Broken link syntax".to_string());
    }

    (score, issues)
}

fn check_text(content: &str) -> (f64, Vec<String>) {
    let mut score = 1.0;
    let mut issues = Vec::new();
    let lowered = content.to_lowercase();

    let words: Vec<&str> = lowered.split_whitespace().collect();
    let repeated = words.windows(2).filter(|pair| pair[0] == pair[1]).count();
    if repeated > 2 {
        score -= 0.1;
        issues.push("Repeated words found".to_string());
    }

    let has_typo = patterns::word()
        .find_iter(&lowered)
        .any(|m| COMMON_MISSPELLINGS.contains(m.as_str()));
    if has_typo {
        score -= 0.1;
        issues.push("Possible typos detected".to_string());
    }

    (score, issues)
}
