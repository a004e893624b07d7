//! 评分结果数据模型
//!
//! 维度权重表和质量等级表都是编译期常量，运行期不可修改

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::format::FormatCategory;

/// 默认通过阈值
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.6;

/// 评分维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// 完整性
    Completeness,
    /// 格式规范
    FormatCompliance,
    /// 覆盖度
    Coverage,
    /// 清晰度
    Clarity,
    /// 有效性
    Validity,
}

impl Dimension {
    /// 全部维度，顺序即评分和反馈输出的顺序
    pub const ALL: [Dimension; 5] = [
        Dimension::Completeness,
        Dimension::FormatCompliance,
        Dimension::Coverage,
        Dimension::Clarity,
        Dimension::Validity,
    ];

    /// 维度名称（输出中的键）
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Completeness => "completeness",
            Dimension::FormatCompliance => "format_compliance",
            Dimension::Coverage => "coverage",
            Dimension::Clarity => "clarity",
            Dimension::Validity => "validity",
        }
    }

    /// 维度权重，五个维度之和为 1.0
    pub fn weight(self) -> f64 {
        match self {
            Dimension::Completeness => 0.30,
            Dimension::FormatCompliance => 0.20,
            Dimension::Coverage => 0.25,
            Dimension::Clarity => 0.15,
            Dimension::Validity => 0.10,
        }
    }

    /// 没有任何问题时评分器返回的反馈
    pub fn clear_marker(self) -> &'static str {
        match self {
            Dimension::Completeness => "Complete",
            Dimension::FormatCompliance => "Format compliant",
            Dimension::Coverage => "Good coverage",
            Dimension::Clarity => "Clear and readable",
            Dimension::Validity => "Valid",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单个维度的评分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub feedback: String,
}

impl DimensionScore {
    /// 创建维度评分，分数会被限制在 [0, 1] 并保留 3 位小数
    pub fn new(dimension: Dimension, score: f64, feedback: impl Into<String>) -> Self {
        Self {
            name: dimension.name().to_string(),
            score: round3(score.clamp(0.0, 1.0)),
            weight: dimension.weight(),
            feedback: feedback.into(),
        }
    }

    /// 加权后的分数
    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

/// 质量等级，按档位从低到高排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityRating {
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Satisfactory")]
    Satisfactory,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Excellent")]
    Excellent,
}

/// 等级表：按阈值降序，最后一项阈值为 0.0，保证总能匹配
pub const RATING_TABLE: [(f64, QualityRating); 6] = [
    (0.9, QualityRating::Excellent),
    (0.8, QualityRating::VeryGood),
    (0.7, QualityRating::Good),
    (0.6, QualityRating::Satisfactory),
    (0.5, QualityRating::NeedsImprovement),
    (0.0, QualityRating::Poor),
];

impl QualityRating {
    /// 等级名称
    pub fn label(self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::VeryGood => "Very Good",
            QualityRating::Good => "Good",
            QualityRating::Satisfactory => "Satisfactory",
            QualityRating::NeedsImprovement => "Needs Improvement",
            QualityRating::Poor => "Poor",
        }
    }

    /// 取等级表中第一个阈值 <= score 的等级
    pub fn from_score(score: f64) -> Self {
        RATING_TABLE
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, rating)| *rating)
            .unwrap_or(QualityRating::Poor)
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 一次评分的完整结果
///
/// `scores` 按 [`Dimension::ALL`] 的顺序排列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub weighted_score: f64,
    pub quality_rating: QualityRating,
    pub scores: IndexMap<String, f64>,
    pub feedback: Vec<String>,
    pub passes_threshold: bool,
    pub format_detected: FormatCategory,
}

impl ScoringResult {
    /// 获取某个维度的分数
    pub fn score_of(&self, dimension: Dimension) -> Option<f64> {
        self.scores.get(dimension.name()).copied()
    }
}

/// 保留 3 位小数
///
/// 按浮点数的精确值舍入，恰好落在中点时取偶数位
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
