// ==========================================
// 工时测定与产线平衡系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (分析员最终控制权)
// 方法: 秒表时间研究 (观测样本 → 标准时间 → 节拍时间)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 时间计算规则
pub mod engine;

// API 层 - 输入/输出协作接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::OperationKind;

// 领域实体
pub use domain::{Fraction, Sku, Study};

// 引擎
pub use engine::{
    FractionGenerator, FractionPropagator, RecalcEngine, RecalcResult, RhythmSelector,
    SampleParser, SkuAggregate, SkuAggregator,
};

// API
pub use api::{
    format_time3, FractionPatch, ReportApi, SkuPatch, SkuSummaryRow, StudyApi, StudyError,
    StudyResult,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工时测定与产线平衡系统";
