// ==========================================
// 工时测定与产线平衡系统 - 测定单操作 API
// ==========================================
// 职责: 面向输入协作方 (表单/UI) 的变更接口
// 说明: 对计算输入字段的任何写入, 都在本层同步触发
//       "失效并重算", 引擎内部不做任何隐式订阅
// 红线: 工步的作业类型/描述由分析员直接编辑, 重算不得覆盖
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{StudyError, StudyResult};
use crate::domain::study::{Sku, Study};
use crate::domain::types::OperationKind;
use crate::engine::fraction_gen::FractionGenerator;
use crate::engine::recalc::{RecalcEngine, RecalcResult};
use crate::engine::rhythm::RhythmSelector;

// ==========================================
// SkuPatch - SKU 字段的部分更新
// ==========================================
// 说明: None 表示该字段不修改
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkuPatch {
    pub sku_id: Option<String>,           // SKU编号
    pub operation_name: Option<String>,   // 工序名称
    pub input_material: Option<String>,   // 投入物料
    pub output_material: Option<String>,  // 产出物料
    pub fraction_count: Option<i32>,      // 请求工步数
    pub operator_count: Option<i32>,      // 操作工人数
    pub valuation_factor: Option<f64>,    // 评比系数
    pub allowance_factor: Option<f64>,    // 宽放系数
    pub raw_samples: Option<String>,      // 原始观测样本文本
    pub include_in_rhythm: Option<bool>,  // 是否参与节拍计算
}

impl SkuPatch {
    /// 是否触碰了影响派生时间的计算输入字段
    fn affects_derived_times(&self) -> bool {
        self.raw_samples.is_some()
            || self.valuation_factor.is_some()
            || self.allowance_factor.is_some()
            || self.fraction_count.is_some()
    }

    /// 把补丁应用到 SKU (逐字段覆盖)
    fn apply_to(self, sku: &mut Sku) {
        if let Some(sku_id) = self.sku_id {
            sku.sku_id = sku_id;
        }
        if let Some(operation_name) = self.operation_name {
            sku.operation_name = operation_name;
        }
        if let Some(input_material) = self.input_material {
            sku.input_material = input_material;
        }
        if let Some(output_material) = self.output_material {
            sku.output_material = output_material;
        }
        if let Some(fraction_count) = self.fraction_count {
            sku.fraction_count = fraction_count;
        }
        if let Some(operator_count) = self.operator_count {
            sku.operator_count = operator_count;
        }
        if let Some(valuation_factor) = self.valuation_factor {
            sku.valuation_factor = valuation_factor;
        }
        if let Some(allowance_factor) = self.allowance_factor {
            sku.allowance_factor = allowance_factor;
        }
        if let Some(raw_samples) = self.raw_samples {
            sku.raw_samples = raw_samples;
        }
        if let Some(include_in_rhythm) = self.include_in_rhythm {
            sku.include_in_rhythm = include_in_rhythm;
        }
    }
}

// ==========================================
// FractionPatch - 工步字段的部分更新
// ==========================================
// 说明: 只覆盖描述性字段, 时间字段不接受外部写入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FractionPatch {
    pub kind: Option<OperationKind>, // 作业类型
    pub description: Option<String>, // 工步描述
}

// ==========================================
// StudyApi - 测定单操作 API
// ==========================================
pub struct StudyApi {
    study: Study,
    generator: FractionGenerator,
    recalc_engine: RecalcEngine,
    rhythm_selector: RhythmSelector,
}

impl StudyApi {
    /// 创建新的测定单操作 API (初始含一条默认SKU)
    pub fn new() -> Self {
        Self::with_study(Study::new())
    }

    /// 基于已有测定单创建操作 API
    pub fn with_study(study: Study) -> Self {
        Self {
            study,
            generator: FractionGenerator::new(),
            recalc_engine: RecalcEngine::new(),
            rhythm_selector: RhythmSelector::new(),
        }
    }

    /// 当前测定单 (只读)
    pub fn study(&self) -> &Study {
        &self.study
    }

    // ==========================================
    // 表头操作
    // ==========================================

    /// 设置被测定工序名称
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.study.title = title.into();
        self.study.touch();
    }

    /// 设置负责工程师
    pub fn set_engineer(&mut self, engineer: impl Into<String>) {
        self.study.engineer = engineer.into();
        self.study.touch();
    }

    // ==========================================
    // SKU 序列操作
    // ==========================================

    /// 追加一条默认 SKU
    pub fn add_sku(&mut self) {
        self.study.skus.push(Sku::default());
        self.study.touch();
    }

    /// 按位置删除 SKU
    pub fn remove_sku(&mut self, index: usize) -> StudyResult<()> {
        let len = self.study.skus.len();
        if index >= len {
            return Err(StudyError::SkuIndexOutOfRange { index, len });
        }
        self.study.skus.remove(index);
        self.study.touch();
        Ok(())
    }

    /// 按位置更新 SKU 字段
    ///
    /// 补丁触碰计算输入字段 (样本文本/评比/宽放/工步数) 时,
    /// 同步触发完整重算; 仅改描述性字段时不重算
    pub fn update_sku(&mut self, index: usize, patch: SkuPatch) -> StudyResult<()> {
        let affects_times = patch.affects_derived_times();

        let len = self.study.skus.len();
        let sku = self
            .study
            .skus
            .get_mut(index)
            .ok_or(StudyError::SkuIndexOutOfRange { index, len })?;
        patch.apply_to(sku);
        self.study.touch();

        if affects_times {
            debug!(index, "计算输入字段变更, 触发重算");
            self.recalc_engine.recalc_study(&mut self.study);
        }
        Ok(())
    }

    /// 按位置更新工步的描述性字段
    ///
    /// 不触发重算 (作业类型/描述不影响任何时间计算),
    /// 且后续重算不会覆盖这些编辑
    pub fn update_fraction(
        &mut self,
        sku_index: usize,
        fraction_index: usize,
        patch: FractionPatch,
    ) -> StudyResult<()> {
        let sku_len = self.study.skus.len();
        let sku = self
            .study
            .skus
            .get_mut(sku_index)
            .ok_or(StudyError::SkuIndexOutOfRange {
                index: sku_index,
                len: sku_len,
            })?;

        let fraction_len = sku.fractions.len();
        let fraction =
            sku.fractions
                .get_mut(fraction_index)
                .ok_or(StudyError::FractionIndexOutOfRange {
                    sku_index,
                    fraction_index,
                    len: fraction_len,
                })?;

        if let Some(kind) = patch.kind {
            fraction.kind = kind;
        }
        if let Some(description) = patch.description {
            fraction.description = description;
        }
        self.study.touch();
        Ok(())
    }

    // ==========================================
    // 重算操作
    // ==========================================

    /// 按请求工步数重建每条 SKU 的工步列表, 然后重算
    ///
    /// 保留位置上的既有工步原样保留 (含分析员编辑)
    pub fn regenerate_fraction_lists(&mut self) -> RecalcResult {
        self.generator.regenerate(&mut self.study);
        self.study.touch();
        self.recalc_engine.recalc_study(&mut self.study)
    }

    /// 对全部 SKU 执行完整重算 (解析→聚合→广播)
    pub fn recompute_all(&mut self) -> RecalcResult {
        self.study.touch();
        self.recalc_engine.recalc_study(&mut self.study)
    }

    // ==========================================
    // 节拍计算操作
    // ==========================================

    /// 翻转 SKU 的节拍参与标志, 返回新值
    pub fn toggle_inclusion(&mut self, index: usize) -> StudyResult<bool> {
        let len = self.study.skus.len();
        let sku = self
            .study
            .skus
            .get_mut(index)
            .ok_or(StudyError::SkuIndexOutOfRange { index, len })?;
        sku.include_in_rhythm = !sku.include_in_rhythm;
        let flag = sku.include_in_rhythm;
        self.study.touch();
        Ok(flag)
    }

    /// 全部 SKU 纳入节拍计算
    pub fn include_all(&mut self) {
        for sku in &mut self.study.skus {
            sku.include_in_rhythm = true;
        }
        self.study.touch();
    }

    /// 当前全局节拍时间 (随读随算, 无缓存)
    pub fn global_rhythm_time(&self) -> Option<f64> {
        self.rhythm_selector.global_rhythm(&self.study)
    }
}

impl Default for StudyApi {
    fn default() -> Self {
        Self::new()
    }
}
