//! 评分报告

use serde::{Deserialize, Serialize};

use crate::models::score::ScoringResult;

/// 单条提交的评分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSubmission {
    pub id: String,
    pub result: ScoringResult,
}

/// 单个批次的评分汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub pass_threshold: f64,
    pub passed: usize,
    pub total: usize,
    pub results: Vec<ScoredSubmission>,
}

impl BatchReport {
    /// 由评分结果构建批次汇总
    pub fn new(name: impl Into<String>, pass_threshold: f64, results: Vec<ScoredSubmission>) -> Self {
        let passed = results.iter().filter(|r| r.result.passes_threshold).count();
        Self {
            name: name.into(),
            pass_threshold,
            passed,
            total: results.len(),
            results,
        }
    }
}

/// 整次运行的评分报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub generated_at: String,
    pub batches: Vec<BatchReport>,
}

impl QualityReport {
    /// 以当前本地时间创建报告
    pub fn new(batches: Vec<BatchReport>) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            batches,
        }
    }

    /// 所有批次的通过数
    pub fn passed(&self) -> usize {
        self.batches.iter().map(|b| b.passed).sum()
    }

    /// 所有批次的提交总数
    pub fn total(&self) -> usize {
        self.batches.iter().map(|b| b.total).sum()
    }
}
