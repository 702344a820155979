// ==========================================
// 工时测定与产线平衡系统 - API 层
// ==========================================
// 职责: 提供输入/输出协作方使用的业务接口
// ==========================================

pub mod error;
pub mod report_api;
pub mod study_api;

// 重导出核心类型
pub use error::{StudyError, StudyResult};
pub use report_api::{format_time3, ReportApi, SkuSummaryRow};
pub use study_api::{FractionPatch, SkuPatch, StudyApi};
