// ==========================================
// 工时测定与产线平衡系统 - 节拍时间选取引擎
// ==========================================
// 职责: 在分析员勾选的 SKU 中选取最大标准时间作为全局节拍时间
// 规则: 节拍时间 = max( 勾选且非空的 TE(SKU) ), 按6位小数舍入
// 红线: 无合格 SKU 时节拍时间为空, 不是错误
// ==========================================

use crate::domain::study::Study;
use crate::engine::aggregator::round6;

// ==========================================
// RhythmSelector - 节拍时间选取器
// ==========================================
pub struct RhythmSelector;

impl RhythmSelector {
    /// 创建新的节拍时间选取器
    pub fn new() -> Self {
        Self
    }

    /// 计算全局节拍时间
    ///
    /// 过滤: include_in_rhythm 为真 且 标准时间汇总非空。
    /// 过滤集为空时返回 None; 否则返回最大值再按6位小数舍入
    /// (对已舍入值是恒等操作, 但舍入规则必须一致)
    pub fn global_rhythm(&self, study: &Study) -> Option<f64> {
        study
            .skus
            .iter()
            .filter(|sku| sku.include_in_rhythm)
            .filter_map(|sku| sku.standardized_summary)
            .fold(None, |max, te| match max {
                Some(current) if current >= te => Some(current),
                _ => Some(te),
            })
            .map(round6)
    }
}

impl Default for RhythmSelector {
    fn default() -> Self {
        Self::new()
    }
}
