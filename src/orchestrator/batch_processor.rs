//! 批次处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批次的加载、评分和报告输出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、输出启动信息
//! 2. **批量加载**：扫描并加载所有批次文件（`Vec<SubmissionBatch>`），没有时使用内置示例
//! 3. **并发评分**：委托 `batch_runner` 以有限并发评分，保持输入顺序
//! 4. **报告输出**：汇总所有批次结果，写出 JSON 报告

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{
    load_all_batches, BatchReport, QualityReport, ScoredSubmission, SubmissionBatch,
};
use crate::orchestrator::batch_runner;
use crate::utils::logging;
use crate::workflow::SubmissionCtx;

/// 预览内容的最大字符数
const PREVIEW_CHARS: usize = 60;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate().map_err(AppError::from)?;
        logging::log_startup(&config);
        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<QualityReport> {
        let batches = self.load_batches().await;

        let total_submissions: usize = batches.iter().map(|b| b.submissions.len()).sum();
        logging::log_batches_loaded(batches.len(), total_submissions);

        let report = self.score_batches(batches).await?;
        write_report(Path::new(&self.config.report_file), &report)?;

        logging::print_final_stats(report.passed(), report.total(), &self.config.report_file);
        Ok(report)
    }

    /// 加载批次；目录不存在或没有批次时使用内置示例
    async fn load_batches(&self) -> Vec<SubmissionBatch> {
        info!("\n📁 正在扫描待评分的批次...");
        match load_all_batches(&self.config.input_folder).await {
            Ok(batches) if !batches.is_empty() => batches,
            Ok(_) => {
                warn!("⚠️ 没有找到待评分的TOML文件，使用内置示例");
                vec![SubmissionBatch::demo()]
            }
            Err(e) => {
                warn!("⚠️ {:#}，使用内置示例", e);
                vec![SubmissionBatch::demo()]
            }
        }
    }

    /// 依次评分所有批次
    pub async fn score_batches(&self, batches: Vec<SubmissionBatch>) -> Result<QualityReport> {
        let total_batches = batches.len();
        let mut reports = Vec::with_capacity(total_batches);

        for (idx, batch) in batches.into_iter().enumerate() {
            let batch_num = idx + 1;
            let threshold = batch.threshold_or(self.config.pass_threshold);
            logging::log_batch_start(
                batch_num,
                total_batches,
                &batch.name,
                batch.submissions.len(),
                threshold,
            );

            let report = self.score_batch(batch, threshold).await?;
            logging::log_batch_complete(batch_num, report.passed, report.total);
            reports.push(report);
        }

        Ok(QualityReport::new(reports))
    }

    /// 评分单个批次
    async fn score_batch(&self, batch: SubmissionBatch, threshold: f64) -> Result<BatchReport> {
        let contents: Vec<String> = batch
            .submissions
            .iter()
            .map(|s| s.content.clone())
            .collect();

        let results = batch_runner::score_many_concurrent(
            contents,
            threshold,
            self.config.max_concurrent_submissions,
        )
        .await?;

        let mut scored = Vec::with_capacity(results.len());
        for (idx, (submission, result)) in batch.submissions.into_iter().zip(results).enumerate() {
            let ctx = SubmissionCtx::new(&batch.name, idx + 1, &submission.id);
            info!(
                "{} {} {:.3} {} ({}) | {}",
                ctx,
                if result.passes_threshold { "✅" } else { "❌" },
                result.weighted_score,
                result.quality_rating,
                result.format_detected,
                logging::truncate_text(&submission.content.replace('\n', " "), PREVIEW_CHARS)
            );
            if self.config.verbose_logging {
                for line in &result.feedback {
                    info!("{}   {}", ctx, line);
                }
            }
            scored.push(ScoredSubmission {
                id: submission.id,
                result,
            });
        }

        Ok(BatchReport::new(batch.name, threshold, scored))
    }
}

/// 写出 JSON 报告
pub fn write_report(path: &Path, report: &QualityReport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;

    fn test_config(report_file: String) -> Config {
        Config {
            input_folder: "/definitely/not/a/real/folder".to_string(),
            report_file,
            ..Config::default()
        }
    }

    fn report_path(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("quality_scorer_{}_{}.json", tag, std::process::id()))
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_initialize_rejects_bad_threshold() {
        let config = Config {
            pass_threshold: -0.1,
            ..Config::default()
        };
        assert!(App::initialize(config).await.is_err());
    }

    #[tokio::test]
    async fn test_batch_threshold_override() {
        let app = App::initialize(test_config(report_path("override")))
            .await
            .unwrap();
        let batch = SubmissionBatch {
            name: "strict".to_string(),
            pass_threshold: Some(1.0),
            submissions: vec![Submission {
                id: "only".to_string(),
                content: "tiny".to_string(),
            }],
            file_path: None,
        };

        let report = app.score_batches(vec![batch]).await.unwrap();
        assert_eq!(report.batches.len(), 1);
        assert_eq!(report.batches[0].pass_threshold, 1.0);
        assert_eq!(report.batches[0].passed, 0);
        assert_eq!(report.batches[0].results[0].id, "only");
    }

    #[tokio::test]
    async fn test_run_falls_back_to_demo_and_writes_report() {
        let path = report_path("demo");
        let app = App::initialize(test_config(path.clone())).await.unwrap();

        let report = app.run().await.unwrap();
        assert_eq!(report.total(), 4);

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["batches"][0]["name"], "demo");
        assert_eq!(
            parsed["batches"][0]["results"][0]["result"]["format_detected"],
            "structured"
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_report_to_missing_dir_fails() {
        let report = QualityReport::new(Vec::new());
        let err = write_report(Path::new("/definitely/not/a/dir/report.json"), &report)
            .unwrap_err();
        assert!(matches!(err, AppError::File(_)));
    }
}
