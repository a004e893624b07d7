//! 应用程序错误类型
//!
//! 评分引擎本身没有错误路径，这里的错误只来自外围：
//! 读取批次文件、解析配置、写出报告

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 报告输出错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 通过阈值不在 [0, 1] 范围内
    #[error("通过阈值 {value} 超出范围 [0, 1]")]
    ThresholdOutOfRange { value: f64 },
    /// 并发数必须大于 0
    #[error("最大并发数必须大于 0")]
    InvalidConcurrency,
}

/// 报告输出错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// 序列化失败
    #[error("JSON序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(ReportError::SerializeFailed(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建目录不存在错误
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::DirectoryNotFound { path: path.into() })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
