//! 评分流程 - 流程层
//!
//! 核心职责：定义"一条提交"的完整评分流程
//!
//! 流程顺序：
//! 1. 检测格式（只检测一次）
//! 2. 五个维度评分器依次评分，互不依赖
//! 3. 加权求和 → 等级 → 是否通过 → 汇总反馈

use indexmap::IndexMap;
use phf::phf_set;
use tracing::debug;

use crate::models::{
    round3, DimensionScore, QualityRating, ScoringResult, DEFAULT_PASS_THRESHOLD,
};
use crate::services::{
    self, ClarityScorer, CompletenessScorer, CoverageScorer, DimensionScorer,
    FormatComplianceScorer, ValidityScorer,
};

/// 各维度"没有问题"的反馈，不出现在对外反馈中
static CLEAR_MARKERS: phf::Set<&'static str> = phf_set! {
    "Complete",
    "Format compliant",
    "Good coverage",
    "Clear and readable",
    "Valid",
};

/// 所有维度都没有问题时的唯一反馈
pub const ALL_CLEAR_FEEDBACK: &str = "All dimensions satisfactory";

/// 评分流程
///
/// - 不持有可变状态，同一实例可以并发使用
/// - 对任何输入都返回完整结果，不会失败
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringFlow {
    completeness: CompletenessScorer,
    format_compliance: FormatComplianceScorer,
    coverage: CoverageScorer,
    clarity: ClarityScorer,
    validity: ValidityScorer,
}

impl ScoringFlow {
    /// 创建新的评分流程
    pub fn new() -> Self {
        Self::default()
    }

    /// 按维度顺序排列的评分器
    fn scorers(&self) -> [&dyn DimensionScorer; 5] {
        [
            &self.completeness,
            &self.format_compliance,
            &self.coverage,
            &self.clarity,
            &self.validity,
        ]
    }

    /// 对一条提交评分
    pub fn run(&self, content: &str, pass_threshold: f64) -> ScoringResult {
        let format = services::detect(content);
        debug!("检测到格式: {} (长度 {} 字符)", format, content.chars().count());

        let dimension_scores: Vec<DimensionScore> = self
            .scorers()
            .iter()
            .map(|scorer| scorer.evaluate(content, format))
            .collect();

        let weighted_sum: f64 = dimension_scores.iter().map(DimensionScore::weighted).sum();
        let weighted_score = round3(weighted_sum);
        let quality_rating = QualityRating::from_score(weighted_score);

        let mut scores = IndexMap::with_capacity(dimension_scores.len());
        let mut feedback = Vec::new();
        for dim in &dimension_scores {
            debug!("  {}: {:.3} ({})", dim.name, dim.score, dim.feedback);
            scores.insert(dim.name.clone(), dim.score);
            if !dim.feedback.is_empty() && !CLEAR_MARKERS.contains(dim.feedback.as_str()) {
                feedback.push(format!("{}: {}", dim.name, dim.feedback));
            }
        }
        if feedback.is_empty() {
            feedback.push(ALL_CLEAR_FEEDBACK.to_string());
        }

        let passes_threshold = weighted_score >= pass_threshold;
        debug!(
            "加权得分: {:.3} → {} (阈值 {}, {})",
            weighted_score,
            quality_rating,
            pass_threshold,
            if passes_threshold { "通过" } else { "未通过" }
        );

        ScoringResult {
            weighted_score,
            quality_rating,
            scores,
            feedback,
            passes_threshold,
            format_detected: format,
        }
    }
}

/// 使用指定阈值对一条提交评分
pub fn score_submission(content: &str, pass_threshold: f64) -> ScoringResult {
    ScoringFlow::new().run(content, pass_threshold)
}

/// 使用默认阈值（0.6）对一条提交评分
pub fn score(content: &str) -> ScoringResult {
    score_submission(content, DEFAULT_PASS_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, FormatCategory};

    #[test]
    fn test_clear_markers_match_dimensions() {
        assert_eq!(CLEAR_MARKERS.len(), Dimension::ALL.len());
        for dim in Dimension::ALL {
            assert!(CLEAR_MARKERS.contains(dim.clear_marker()));
        }
    }

    #[test]
    fn test_scorers_follow_dimension_order() {
        let flow = ScoringFlow::new();
        let order: Vec<Dimension> = flow.scorers().iter().map(|s| s.dimension()).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_structured_submission() {
        let result = score(r#"{"id":"1","name":"Test","value":100,"type":"example","data":{}}"#);
        assert_eq!(result.format_detected, FormatCategory::Structured);
        assert_eq!(result.score_of(Dimension::Completeness), Some(1.0));
        assert_eq!(result.score_of(Dimension::FormatCompliance), Some(1.0));
        assert_eq!(result.score_of(Dimension::Coverage), Some(0.35));
        // 单行 JSON：没有空行，扣 0.1
        assert_eq!(result.score_of(Dimension::Clarity), Some(0.9));
        // data 为空对象
        assert_eq!(result.score_of(Dimension::Validity), Some(0.9));
        // 0.3 + 0.2 + 0.0875 + 0.135 + 0.09 = 0.8125，中点取偶
        assert_eq!(result.weighted_score, 0.812);
        assert_eq!(result.quality_rating, QualityRating::VeryGood);
        assert!(result.passes_threshold);
        assert_eq!(
            result.feedback,
            vec![
                "clarity: Add more paragraph breaks".to_string(),
                "validity: Found 1 null/empty values".to_string(),
            ]
        );
    }

    #[test]
    fn test_weighted_score_rounds_exact_value() {
        // 0.06 + 0.2 + 0.0375 + 0.135 + 0.1 的精确值略小于 0.5325
        let result = score_submission(r#"{"name": [1]}"#, 0.533);
        assert_eq!(result.score_of(Dimension::Completeness), Some(0.2));
        assert_eq!(result.score_of(Dimension::Coverage), Some(0.15));
        assert_eq!(result.weighted_score, 0.532);
        assert_eq!(result.quality_rating, QualityRating::NeedsImprovement);
        assert!(!result.passes_threshold);
    }

    #[test]
    fn test_scores_keep_dimension_order() {
        let result = score("plain words here");
        let keys: Vec<&str> = result.scores.keys().map(String::as_str).collect();
        let expected: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_all_clear_feedback() {
        let content = "{\n  \"id\": \"x-1\",\n\n  \"name\": \"n\",\n  \"data\": {\"a\": {\"b\": {\"c\": {\"d\": 1}}}},\n  \"value\": 3,\n  \"type\": \"t\",\n  \"k1\": 1, \"k2\": 2, \"k3\": 3, \"k4\": 4, \"k5\": 5\n}";
        let result = score(content);
        assert_eq!(result.format_detected, FormatCategory::Structured);
        assert_eq!(result.feedback, vec![ALL_CLEAR_FEEDBACK.to_string()]);
        assert_eq!(result.weighted_score, 1.0);
        assert_eq!(result.quality_rating, QualityRating::Excellent);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let result = score_submission("", 0.0);
        assert!(result.passes_threshold);
        let strict = score_submission("", result.weighted_score);
        assert!(strict.passes_threshold);
        let too_strict = score_submission("", result.weighted_score + 0.001);
        assert!(!too_strict.passes_threshold);
    }

    #[test]
    fn test_malformed_json_never_fails() {
        let result = score("{\"unterminated\": [1, 2");
        assert_ne!(result.format_detected, FormatCategory::Structured);
        assert!((0.0..=1.0).contains(&result.weighted_score));
    }
}
