/// 日志工具模块
///
/// 提供日志初始化和输出格式化的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式下为 `debug`。
/// 重复调用不会报错，测试中可以随意调用
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 多维度质量评分");
    info!("🎯 默认通过阈值: {}", config.pass_threshold);
    info!("📊 最大并发数: {}", config.max_concurrent_submissions);
    info!("{}", "=".repeat(60));
}

/// 记录批次加载信息
///
/// # 参数
/// - `batches`: 批次数量
/// - `submissions`: 提交总数
pub fn log_batches_loaded(batches: usize, submissions: usize) {
    info!("✓ 找到 {} 个批次，共 {} 条提交", batches, submissions);
}

/// 记录批次开始信息
///
/// # 参数
/// - `batch_num`: 批次编号
/// - `total_batches`: 批次总数
/// - `name`: 批次名称
/// - `size`: 本批提交数
/// - `threshold`: 本批使用的通过阈值
pub fn log_batch_start(batch_num: usize, total_batches: usize, name: &str, size: usize, threshold: f64) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始评分第 {}/{} 批: {}", batch_num, total_batches, name);
    info!("📄 本批提交: {} 条 | 通过阈值: {}", size, threshold);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_num: usize, passed: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 通过 {}/{}", batch_num, passed, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `passed`: 通过数量
/// - `total`: 总数
/// - `report_file`: 报告文件路径
pub fn print_final_stats(passed: usize, total: usize, report_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部评分完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 通过: {}/{}", passed, total);
    info!("❌ 未通过: {}", total - passed);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
