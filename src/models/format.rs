/// 提交内容的格式类别
///
/// 每次评分只检测一次，所有维度评分器共享同一结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatCategory {
    /// 结构化数据（JSON）
    Structured,
    /// 标记文本（Markdown）
    Markup,
    /// 源代码
    Code,
    /// 纯文本
    #[serde(rename = "text")]
    PlainText,
}

impl FormatCategory {
    /// 获取对外输出的标识
    pub fn as_str(self) -> &'static str {
        match self {
            FormatCategory::Structured => "structured",
            FormatCategory::Markup => "markup",
            FormatCategory::Code => "code",
            FormatCategory::PlainText => "text",
        }
    }
}

impl std::fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
