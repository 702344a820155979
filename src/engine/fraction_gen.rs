// ==========================================
// 工时测定与产线平衡系统 - 工步生成引擎
// ==========================================
// 职责: 把 SKU 的工步列表调整到请求数量
// 红线: 保留位置上的既有工步必须原样保留 (分析员编辑不可丢失)
// 红线: 截断严格按位置, 与编辑先后无关
// ==========================================

use crate::domain::study::{Fraction, Sku, Study};

// ==========================================
// FractionGenerator - 工步生成器
// ==========================================
pub struct FractionGenerator;

impl FractionGenerator {
    /// 创建新的工步生成器
    pub fn new() -> Self {
        Self
    }

    /// 把 SKU 的工步列表调整到请求数量
    ///
    /// 规则:
    /// - 请求数量非正时按1处理 (钳制, 不拒绝)
    /// - 现有数量不足: 追加新工步, 位置序号顺延,
    ///   工步ID为 `{SKU编号或占位符}-{位置}`, 时间字段置空
    /// - 现有数量超出: 截断到前 N 条
    /// - 数量一致: 不做任何修改
    pub fn resize(&self, sku: &mut Sku) {
        let target = sku.fraction_count.max(1) as usize;
        let current = sku.fractions.len();

        if current < target {
            let prefix = sku.fraction_id_prefix().to_string();
            for position in (current + 1)..=target {
                sku.fractions.push(Fraction::new(&prefix, position as i32));
            }
        } else if current > target {
            sku.fractions.truncate(target);
        }
    }

    /// 对测定单中的每条 SKU 执行工步列表调整
    pub fn regenerate(&self, study: &mut Study) {
        for sku in &mut study.skus {
            self.resize(sku);
        }
    }
}

impl Default for FractionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
