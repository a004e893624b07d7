use std::str::FromStr;

use tracing::warn;

use crate::error::ConfigError;
use crate::models::DEFAULT_PASS_THRESHOLD;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 默认通过阈值（批次文件可覆盖）
    pub pass_threshold: f64,
    /// 同时评分的提交数量
    pub max_concurrent_submissions: usize,
    /// 批次 TOML 文件存放目录
    pub input_folder: String,
    /// 输出报告文件
    pub report_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_concurrent_submissions: 8,
            input_folder: "submissions".to_string(),
            report_file: "quality_report.json".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，缺失或无法解析的值使用默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pass_threshold: env_or("PASS_THRESHOLD", default.pass_threshold),
            max_concurrent_submissions: env_or(
                "MAX_CONCURRENT_SUBMISSIONS",
                default.max_concurrent_submissions,
            ),
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            verbose_logging: env_or("VERBOSE_LOGGING", default.verbose_logging),
        }
    }

    /// 检查配置取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.pass_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.pass_threshold,
            });
        }
        if self.max_concurrent_submissions == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }
        Ok(())
    }
}

/// 解析环境变量；未设置时返回 `Ok(None)`
pub fn parse_env<T: FromStr>(var_name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: std::any::type_name::<T>().to_string(),
        })
}

fn env_or<T: FromStr>(var_name: &str, default: T) -> T {
    match parse_env(var_name) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            warn!("⚠️ {}，使用默认值", e);
            default
        }
    }
}
