// ==========================================
// 工时测定与产线平衡系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含计算逻辑, 不含展示逻辑
// ==========================================

pub mod study;
pub mod types;

// 重导出核心类型
pub use study::{Fraction, Sku, Study, FRACTION_ID_PLACEHOLDER};
pub use types::OperationKind;
