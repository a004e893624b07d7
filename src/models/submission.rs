use serde::{Deserialize, Serialize};

/// 单条待评分的提交
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub content: String,
}

/// 一个批次的提交，对应一个 TOML 文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionBatch {
    pub name: String,
    /// 批次自带的通过阈值，优先于全局配置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_threshold: Option<f64>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SubmissionBatch {
    /// 获取本批次实际使用的阈值
    pub fn threshold_or(&self, default: f64) -> f64 {
        self.pass_threshold.unwrap_or(default)
    }

    /// 内置示例批次：结构化数据、Markdown、代码、纯文本各一条
    pub fn demo() -> Self {
        let submissions = vec![
            Submission {
                id: "demo-structured".to_string(),
                content: r#"{"id": "test-001", "name": "Sample Data", "value": 42, "type": "example", "data": {"nested": true}}"#
                    .to_string(),
            },
            Submission {
                id: "demo-markup".to_string(),
                content: "# Sample Document\n\nThis is a **sample** markdown document.\n\n## Features\n\n- Item 1\n- Item 2\n- Item 3\n\n[Learn more](https://example.com)\n\n```\nhello()\n```\n"
                    .to_string(),
            },
            Submission {
                id: "demo-code".to_string(),
                content: "\ndef calculate_score(data: dict) -> float:\n    '''Calculate the weighted score.'''\n    total = 0.0\n    for key, value in data.items():\n        total += value\n    return total\n\n# Main\nif __name__ == \"__main__\":\n    result = calculate_score({\"a\": 1, \"b\": 2})\n    print(f\"Score: {result}\")\n"
                    .to_string(),
            },
            Submission {
                id: "demo-text".to_string(),
                content: "This is a sample text submission. It contains multiple sentences that\nexpress a coherent idea. The text should be scored based on its completeness,\nreadability, and overall quality.\n\nThe second paragraph continues the discussion. Good text submissions should\nhave proper structure and clear communication of ideas."
                    .to_string(),
            },
        ];

        Self {
            name: "demo".to_string(),
            pass_threshold: None,
            submissions,
            file_path: None,
        }
    }
}
