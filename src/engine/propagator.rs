// ==========================================
// 工时测定与产线平衡系统 - 工步传播引擎
// ==========================================
// 职责: 把 SKU 级聚合时间统一广播到每条工步,
//       再由工步级数值回算 SKU 汇总字段
// 红线: 回算是对外契约面, 不得用 SKU 级聚合值短路替代 —
//       汇总的事实来源必须是工步级数值
// ==========================================

use crate::domain::study::Sku;
use crate::engine::aggregator::{mean6, SkuAggregate};

// ==========================================
// FractionPropagator - 工步传播器
// ==========================================
pub struct FractionPropagator;

impl FractionPropagator {
    /// 创建新的工步传播器
    pub fn new() -> Self {
        Self
    }

    /// 广播聚合时间并回算 SKU 汇总
    ///
    /// 1) 每条工步的观测/标准时间覆盖为 SKU 聚合值 (统一广播)
    /// 2) SKU 汇总 = 工步非空数值的 mean6 (逐指标独立)
    ///    某指标无任何非空工步值时, 该汇总为空
    pub fn propagate(&self, sku: &mut Sku, aggregate: &SkuAggregate) {
        for fraction in &mut sku.fractions {
            fraction.observed_time = aggregate.observed_avg;
            fraction.standardized_time = aggregate.standardized;
        }

        let observed: Vec<f64> = sku
            .fractions
            .iter()
            .filter_map(|f| f.observed_time)
            .collect();
        let standardized: Vec<f64> = sku
            .fractions
            .iter()
            .filter_map(|f| f.standardized_time)
            .collect();

        sku.observed_summary = mean6(&observed);
        sku.standardized_summary = mean6(&standardized);
    }
}

impl Default for FractionPropagator {
    fn default() -> Self {
        Self::new()
    }
}
