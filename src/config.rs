//! 报告配置

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 行程输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 逐行文本
    #[default]
    Text,
    /// 表格
    Table,
    /// JSON
    Json,
}

/// 报告配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// 小数位数
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}
