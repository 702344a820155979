// ==========================================
// 工时测定与产线平衡系统 - 展示与导出 API
// ==========================================
// 职责: 面向输出协作方 (表格/打印/导出) 的只读视图
// 红线: 展示用3位小数截断只发生在本层,
//       不得回写进内部存储的6位小数精度
// ==========================================

use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::domain::study::Study;
use crate::engine::rhythm::RhythmSelector;

/// 可空时间的展示格式化: 固定3位小数, 空值/非有限值显示为空串
pub fn format_time3(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.3}", v),
        _ => String::new(),
    }
}

// ==========================================
// SkuSummaryRow - SKU 汇总表行
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SkuSummaryRow {
    pub sku_id: String,               // SKU编号
    pub operation_name: String,       // 工序名称
    pub observed_display: String,     // TR(SKU) 3位小数展示
    pub standardized_display: String, // TE(SKU) 3位小数展示
    pub include_in_rhythm: bool,      // 是否参与节拍计算
}

// ==========================================
// ReportApi - 展示与导出 API
// ==========================================
pub struct ReportApi {
    rhythm_selector: RhythmSelector,
}

impl ReportApi {
    /// 创建新的展示与导出 API
    pub fn new() -> Self {
        Self {
            rhythm_selector: RhythmSelector::new(),
        }
    }

    /// SKU 汇总表行 (对应表格展示)
    pub fn sku_rows(&self, study: &Study) -> Vec<SkuSummaryRow> {
        study
            .skus
            .iter()
            .map(|sku| SkuSummaryRow {
                sku_id: sku.sku_id.clone(),
                operation_name: sku.operation_name.clone(),
                observed_display: format_time3(sku.observed_summary),
                standardized_display: format_time3(sku.standardized_summary),
                include_in_rhythm: sku.include_in_rhythm,
            })
            .collect()
    }

    /// 全局节拍时间的3位小数展示
    pub fn global_rhythm_display(&self, study: &Study) -> String {
        format_time3(self.rhythm_selector.global_rhythm(study))
    }

    /// 当前状态的完整 JSON 快照 (导出/打印用, 不透明渲染)
    ///
    /// 内容为领域类型的 serde 表示加全局节拍时间,
    /// 除此之外不承诺任何结构契约
    pub fn study_snapshot(&self, study: &Study) -> JsonValue {
        json!({
            "study": study,
            "global_rhythm_time": self.rhythm_selector.global_rhythm(study),
        })
    }
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::new()
    }
}
