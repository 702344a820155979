// ==========================================
// 测定单操作 API 集成测试
// ==========================================
// 测试范围:
// 1. 默认构造与 SKU 序列操作
// 2. 补丁更新触发同步重算
// 3. 工步编辑在重建/重算中保留
// 4. 节拍参与操作
// 5. 展示格式化与 JSON 快照
// ==========================================

use time_motion_study::{
    format_time3, logging, FractionPatch, OperationKind, ReportApi, SkuPatch, StudyApi,
    StudyError,
};

// ==========================================
// 辅助函数
// ==========================================

/// 构造一张含两条已测样本 SKU 的测定单
fn sample_api() -> StudyApi {
    let mut api = StudyApi::new();
    api.update_sku(
        0,
        SkuPatch {
            sku_id: Some("SKU-001".to_string()),
            fraction_count: Some(2),
            raw_samples: Some("28.23, 28.97, 28.70".to_string()),
            ..SkuPatch::default()
        },
    )
    .expect("更新SKU-001失败");

    api.add_sku();
    api.update_sku(
        1,
        SkuPatch {
            sku_id: Some("SKU-002".to_string()),
            fraction_count: Some(3),
            raw_samples: Some("33.0".to_string()),
            ..SkuPatch::default()
        },
    )
    .expect("更新SKU-002失败");

    api.regenerate_fraction_lists();
    api
}

// ==========================================
// 默认构造与 SKU 序列操作
// ==========================================

#[test]
fn test_new_study_starts_with_default_sku() {
    let api = StudyApi::new();

    let study = api.study();
    assert_eq!(study.skus.len(), 1, "新测定单含一条默认SKU");
    assert_eq!(study.skus[0].valuation_factor, 1.0);
    assert!(study.skus[0].include_in_rhythm);
    assert!(api.global_rhythm_time().is_none(), "未测定时节拍为空");
}

#[test]
fn test_add_and_remove_sku() {
    let mut api = StudyApi::new();
    api.add_sku();
    api.add_sku();
    assert_eq!(api.study().skus.len(), 3);

    api.remove_sku(1).expect("按位置删除失败");
    assert_eq!(api.study().skus.len(), 2);

    // 越界删除报错而非 panic
    let err = api.remove_sku(5).unwrap_err();
    assert!(
        matches!(err, StudyError::SkuIndexOutOfRange { index: 5, len: 2 }),
        "应返回SKU序号越界错误"
    );
}

// ==========================================
// 补丁更新触发同步重算
// ==========================================

#[test]
fn test_patch_on_calc_input_triggers_recompute() {
    logging::init_test();
    let mut api = sample_api();

    assert_eq!(api.study().skus[0].standardized_summary, Some(0.477222));

    // 修改宽放系数 → 立即重算
    api.update_sku(
        0,
        SkuPatch {
            allowance_factor: Some(1.2),
            ..SkuPatch::default()
        },
    )
    .expect("更新宽放系数失败");

    // 28.633333 × 1.2 / 60 = 0.572667 (6位舍入)
    assert_eq!(
        api.study().skus[0].standardized_summary,
        Some(0.572667),
        "计算输入变更后派生值应已重算"
    );

    // 修改样本文本 → 立即重算
    api.update_sku(
        1,
        SkuPatch {
            raw_samples: Some("".to_string()),
            ..SkuPatch::default()
        },
    )
    .expect("更新样本文本失败");
    assert!(
        api.study().skus[1].standardized_summary.is_none(),
        "清空样本后TE应降级为空"
    );
}

#[test]
fn test_descriptive_patch_does_not_recompute() {
    let mut api = sample_api();
    let before = api.study().skus.clone();

    api.update_sku(
        0,
        SkuPatch {
            operation_name: Some("刮削".to_string()),
            operator_count: Some(2),
            ..SkuPatch::default()
        },
    )
    .expect("更新描述字段失败");

    let after = &api.study().skus[0];
    assert_eq!(after.operation_name, "刮削");
    assert_eq!(after.operator_count, 2);
    assert_eq!(after.observed_summary, before[0].observed_summary, "派生值不变");
    assert_eq!(after.fractions, before[0].fractions, "工步不变");
}

// ==========================================
// 工步编辑在重建/重算中保留
// ==========================================

#[test]
fn test_fraction_edits_survive_regenerate_and_recompute() {
    let mut api = sample_api();

    api.update_fraction(
        0,
        1,
        FractionPatch {
            kind: Some(OperationKind::Automatic),
            description: Some("自动压合".to_string()),
        },
    )
    .expect("编辑工步失败");

    // 扩张 2→4 并重建, 再全量重算
    api.update_sku(
        0,
        SkuPatch {
            fraction_count: Some(4),
            ..SkuPatch::default()
        },
    )
    .expect("更新工步数失败");
    api.regenerate_fraction_lists();
    api.recompute_all();

    let sku = &api.study().skus[0];
    assert_eq!(sku.fractions.len(), 4);
    assert_eq!(sku.fractions[1].kind, OperationKind::Automatic, "编辑应保留");
    assert_eq!(sku.fractions[1].description, "自动压合", "编辑应保留");
    // 保留的工步同样持有广播后的时间
    assert_eq!(sku.fractions[1].observed_time, sku.observed_summary);
}

#[test]
fn test_update_fraction_out_of_range() {
    let mut api = sample_api();

    let err = api
        .update_fraction(0, 9, FractionPatch::default())
        .unwrap_err();
    assert!(
        matches!(
            err,
            StudyError::FractionIndexOutOfRange {
                sku_index: 0,
                fraction_index: 9,
                ..
            }
        ),
        "应返回工步序号越界错误"
    );
}

// ==========================================
// 节拍参与操作
// ==========================================

#[test]
fn test_toggle_inclusion_and_include_all() {
    let mut api = sample_api();

    // SKU-002 TE = 33/60 = 0.55 为最大
    assert_eq!(api.global_rhythm_time(), Some(0.55));

    // 剔除 SKU-002 后取次大值
    let flag = api.toggle_inclusion(1).expect("翻转节拍参与失败");
    assert!(!flag, "翻转后应为不参与");
    assert_eq!(api.global_rhythm_time(), Some(0.477222));

    // 全部剔除 → 节拍为空
    api.toggle_inclusion(0).expect("翻转节拍参与失败");
    assert!(api.global_rhythm_time().is_none(), "无勾选SKU时节拍为空");

    // 全选恢复
    api.include_all();
    assert_eq!(api.global_rhythm_time(), Some(0.55));
}

// ==========================================
// 展示格式化与 JSON 快照
// ==========================================

#[test]
fn test_report_rows_and_rhythm_display() {
    let api = sample_api();
    let report = ReportApi::new();

    let rows = report.sku_rows(api.study());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sku_id, "SKU-001");
    assert_eq!(rows[0].observed_display, "28.633", "展示为3位小数");
    assert_eq!(rows[0].standardized_display, "0.477");
    assert_eq!(report.global_rhythm_display(api.study()), "0.550");

    // 展示截断不影响存储精度
    assert_eq!(api.study().skus[0].observed_summary, Some(28.633333));
    assert_eq!(format_time3(None), "", "空值展示为空串");
}

#[test]
fn test_study_snapshot_export() {
    let mut api = sample_api();
    api.set_title("皮革刮削工序");
    api.set_engineer("测试工程师");

    let snapshot = ReportApi::new().study_snapshot(api.study());

    assert_eq!(snapshot["study"]["title"], "皮革刮削工序");
    assert_eq!(snapshot["study"]["engineer"], "测试工程师");
    assert_eq!(snapshot["study"]["skus"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(
        snapshot["study"]["skus"][0]["fractions"][0]["kind"],
        "MANUAL_MANUFACTURING"
    );
    assert_eq!(snapshot["global_rhythm_time"], 0.55);
}
