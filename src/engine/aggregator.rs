// ==========================================
// 工时测定与产线平衡系统 - SKU 时间聚合引擎
// ==========================================
// 依据: 秒表时间研究法 标准时间公式
// 职责: 由有效样本 + 评比/宽放系数 计算 SKU 级时间
// 输入: 样本序列, 评比系数, 宽放系数
// 输出: 观测时间均值 TR + 标准时间 TE
// 红线: 每个派生值在产生处即按6位小数舍入, 重复计算必须为不动点
// ==========================================

use serde::{Deserialize, Serialize};

/// 标准时间的单位换算除数 (观测时间单位 → 标准时间单位)
const UNIT_CONVERSION_DIVISOR: f64 = 60.0;

/// 按6位小数舍入 (四舍五入, 远离零)
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// 算术平均并按6位小数舍入, 空序列返回 None
pub fn mean6(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round6(sum / values.len() as f64))
}

// ==========================================
// SkuAggregate - SKU 级聚合结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkuAggregate {
    pub observed_avg: Option<f64>, // 观测时间均值 TR (无有效样本时为空)
    pub standardized: Option<f64>, // 标准时间 TE (TR为空时为空)
}

// ==========================================
// SkuAggregator - SKU 时间聚合器
// ==========================================
pub struct SkuAggregator;

impl SkuAggregator {
    /// 创建新的 SKU 时间聚合器
    pub fn new() -> Self {
        Self
    }

    /// 计算 SKU 级聚合时间
    ///
    /// - TR = mean6(样本)
    /// - TE = round6(TR × 评比系数 × 宽放系数 / 60)
    ///
    /// 除以60是单位换算, 必须原样保留, 不做其他缩放
    pub fn aggregate(&self, samples: &[f64], valuation: f64, allowance: f64) -> SkuAggregate {
        let observed_avg = mean6(samples);
        let standardized = observed_avg
            .map(|avg| round6(avg * valuation * allowance / UNIT_CONVERSION_DIVISOR));

        SkuAggregate {
            observed_avg,
            standardized,
        }
    }
}

impl Default for SkuAggregator {
    fn default() -> Self {
        Self::new()
    }
}
