// ==========================================
// 工时测定与产线平衡系统 - 领域类型定义
// ==========================================
// 依据: 秒表时间研究法 (Stopwatch Time Study)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作业类型 (Operation Kind)
// ==========================================
// 说明: 当前阶段仅作描述性元数据, 不参与任何时间计算
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    ManualManufacturing, // 手工制造
    Automatic,           // 自动作业
}

impl Default for OperationKind {
    fn default() -> Self {
        OperationKind::ManualManufacturing
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::ManualManufacturing => write!(f, "MANUAL_MANUFACTURING"),
            OperationKind::Automatic => write!(f, "AUTOMATIC"),
        }
    }
}
