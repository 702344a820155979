// ==========================================
// 工时测定与产线平衡系统 - 重算引擎
// ==========================================
// 职责: 对测定单执行单遍同步重算
//       样本解析 → SKU 聚合 → 工步广播与回算
// 红线: 单条 SKU 输入异常只降级为空值, 不得阻断其余 SKU 的重算
// 红线: 同一输入重复重算, 派生字段必须逐位一致
// ==========================================

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::domain::study::Study;
use crate::engine::aggregator::SkuAggregator;
use crate::engine::propagator::FractionPropagator;
use crate::engine::sample_parser::SampleParser;

// ==========================================
// RecalcResult - 重算结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalcResult {
    pub total_skus: usize,    // 总SKU数
    pub computed_skus: usize, // 解析出有效样本并得出时间的SKU数
    pub null_skus: usize,     // 降级为空值的SKU数
    pub elapsed_ms: i64,      // 耗时(毫秒)
}

// ==========================================
// RecalcEngine - 重算引擎
// ==========================================
pub struct RecalcEngine {
    parser: SampleParser,
    aggregator: SkuAggregator,
    propagator: FractionPropagator,
}

impl RecalcEngine {
    /// 创建新的重算引擎
    pub fn new() -> Self {
        Self {
            parser: SampleParser::new(),
            aggregator: SkuAggregator::new(),
            propagator: FractionPropagator::new(),
        }
    }

    /// 对测定单执行完整重算
    ///
    /// 对每条 SKU: 解析样本文本 → 计算 TR/TE → 广播到工步并回算汇总。
    /// 不改变工步列表的形状, 也不改写分析员录入的任何输入字段
    #[instrument(skip(self, study), fields(sku_count = study.skus.len()))]
    pub fn recalc_study(&self, study: &mut Study) -> RecalcResult {
        let started = Instant::now();
        let mut computed_skus = 0;
        let mut null_skus = 0;

        for sku in &mut study.skus {
            let samples = self.parser.parse(&sku.raw_samples);
            let aggregate =
                self.aggregator
                    .aggregate(&samples, sku.valuation_factor, sku.allowance_factor);

            if aggregate.observed_avg.is_some() {
                computed_skus += 1;
            } else {
                null_skus += 1;
            }

            debug!(
                sku_id = %sku.sku_id,
                sample_count = samples.len(),
                observed_avg = ?aggregate.observed_avg,
                standardized = ?aggregate.standardized,
                "SKU重算完成"
            );

            self.propagator.propagate(sku, &aggregate);
        }

        let result = RecalcResult {
            total_skus: study.skus.len(),
            computed_skus,
            null_skus,
            elapsed_ms: started.elapsed().as_millis() as i64,
        };

        info!(
            total = result.total_skus,
            computed = result.computed_skus,
            degraded = result.null_skus,
            elapsed_ms = result.elapsed_ms,
            "测定单重算完成"
        );

        result
    }
}

impl Default for RecalcEngine {
    fn default() -> Self {
        Self::new()
    }
}
