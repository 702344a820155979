// ==========================================
// 工时测定与产线平衡系统 - 引擎层
// ==========================================
// 职责: 实现时间计算业务规则
// 红线: 引擎层无异常路径, 异常输入一律降级为空值
// 红线: 引擎只写派生字段, 不改写分析员录入的输入字段
// ==========================================

pub mod aggregator;
pub mod fraction_gen;
pub mod propagator;
pub mod recalc;
pub mod rhythm;
pub mod sample_parser;

// 重导出核心引擎
pub use aggregator::{mean6, round6, SkuAggregate, SkuAggregator};
pub use fraction_gen::FractionGenerator;
pub use propagator::FractionPropagator;
pub use recalc::{RecalcEngine, RecalcResult};
pub use rhythm::RhythmSelector;
pub use sample_parser::SampleParser;
