// ==========================================
// 工时测定与产线平衡系统 - API层错误类型
// ==========================================
// 职责: 定义按位置操作类 API 的错误类型
// 说明: 引擎层没有错误路径 (空值降级策略), 错误只出现在
//       输入协作方按位置寻址失败时
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("SKU序号越界: index={index}, 当前数量={len}")]
    SkuIndexOutOfRange { index: usize, len: usize },

    #[error("工步序号越界: sku_index={sku_index}, fraction_index={fraction_index}, 当前数量={len}")]
    FractionIndexOutOfRange {
        sku_index: usize,
        fraction_index: usize,
        len: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type StudyResult<T> = Result<T, StudyError>;
