// ==========================================
// 工时测定与产线平衡系统 - 测定单领域模型
// ==========================================
// 职责: 定义 Study / Sku / Fraction 实体
// 红线: 派生字段 (观测/标准时间) 只允许由重算引擎写入
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::OperationKind;

/// SKU 编号为空时用于生成工步ID的占位前缀
pub const FRACTION_ID_PLACEHOLDER: &str = "SKU";

// ==========================================
// Fraction - 工步 (SKU 工序的分解单元)
// ==========================================
// 说明: 时间字段当前为 SKU 级聚合值的统一广播,
//       不在工步级单独录入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fraction {
    pub fraction_id: String,            // 工步ID ({SKU编号}-{位置序号})
    pub position: i32,                  // 位置序号 (1起始, 连续无空洞)
    pub kind: OperationKind,            // 作业类型 (描述性)
    pub description: String,            // 工步描述
    pub observed_time: Option<f64>,     // 观测时间 TR (派生, 可空)
    pub standardized_time: Option<f64>, // 标准时间 TE (派生, 可空)
}

impl Fraction {
    /// 创建新工步 (时间字段置空, 等待重算引擎广播)
    pub fn new(id_prefix: &str, position: i32) -> Self {
        Self {
            fraction_id: format!("{}-{}", id_prefix, position),
            position,
            kind: OperationKind::default(),
            description: String::new(),
            observed_time: None,
            standardized_time: None,
        }
    }
}

// ==========================================
// Sku - 被测定的制成品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub sku_id: String,                    // SKU编号 (展示键, 不要求唯一)
    pub operation_name: String,            // 工序名称
    pub input_material: String,            // 投入物料
    pub output_material: String,           // 产出物料
    pub fraction_count: i32,               // 请求工步数 (语义下限为1)
    pub operator_count: i32,               // 操作工人数 (仅展示, 不参与计算)
    pub valuation_factor: f64,             // 评比系数 (期望 (0.0, 1.0], 不强制)
    pub allowance_factor: f64,             // 宽放系数 (自由正乘数)
    pub raw_samples: String,               // 原始观测时间样本文本 "28.23, 28.97, ..."
    pub fractions: Vec<Fraction>,          // 工步列表 (按位置有序)
    pub observed_summary: Option<f64>,     // 观测时间汇总 TR(SKU) (派生, 可空)
    pub standardized_summary: Option<f64>, // 标准时间汇总 TE(SKU) (派生, 可空)
    pub include_in_rhythm: bool,           // 是否参与节拍时间计算
}

impl Sku {
    /// 生成工步ID使用的前缀 (SKU编号为空时退化为占位符)
    pub fn fraction_id_prefix(&self) -> &str {
        if self.sku_id.is_empty() {
            FRACTION_ID_PLACEHOLDER
        } else {
            &self.sku_id
        }
    }
}

impl Default for Sku {
    fn default() -> Self {
        Self {
            sku_id: String::new(),
            operation_name: String::new(),
            input_material: String::new(),
            output_material: String::new(),
            fraction_count: 1,
            operator_count: 1,
            valuation_factor: 1.0,
            allowance_factor: 1.0,
            raw_samples: String::new(),
            fractions: Vec::new(),
            observed_summary: None,
            standardized_summary: None,
            include_in_rhythm: true,
        }
    }
}

// ==========================================
// Study - 测定单 (顶层容器)
// ==========================================
// 说明: 表头字段仅为元数据, 不参与任何计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub title: String,             // 被测定工序名称
    pub engineer: String,          // 负责工程师
    pub skus: Vec<Sku>,            // SKU 序列 (按录入有序)
    pub created_at: NaiveDateTime, // 创建时间
    pub updated_at: NaiveDateTime, // 更新时间
}

impl Study {
    /// 创建新测定单, 初始包含一条默认 SKU
    pub fn new() -> Self {
        let now = Utc::now().naive_utc();
        Self {
            title: String::new(),
            engineer: String::new(),
            skus: vec![Sku::default()],
            created_at: now,
            updated_at: now,
        }
    }

    /// 刷新更新时间 (由 API 层在每次外部写入后调用)
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Default for Study {
    fn default() -> Self {
        Self::new()
    }
}
