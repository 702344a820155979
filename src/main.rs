// ==========================================
// 工时测定与产线平衡系统 - 演示入口
// ==========================================
// 职责: 构造一张示例测定单, 跑完整重算链路并打印汇总
// ==========================================

use time_motion_study::{logging, ReportApi, SkuPatch, StudyApi};

fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("工时测定与产线平衡系统 - 决策支持系统");
    tracing::info!("系统版本: {}", time_motion_study::VERSION);
    tracing::info!("==================================================");

    let mut api = StudyApi::new();
    api.set_title("皮革刮削工序");
    api.set_engineer("示例工程师");

    // SKU-001: 三次观测
    if let Err(err) = api.update_sku(
        0,
        SkuPatch {
            sku_id: Some("SKU-001".to_string()),
            operation_name: Some("刮削".to_string()),
            fraction_count: Some(3),
            raw_samples: Some("28.23, 28.97, 28.70".to_string()),
            ..SkuPatch::default()
        },
    ) {
        tracing::error!("更新SKU失败: {}", err);
        return;
    }

    // SKU-002: 样本含非法片段, 静默丢弃
    api.add_sku();
    if let Err(err) = api.update_sku(
        1,
        SkuPatch {
            sku_id: Some("SKU-002".to_string()),
            operation_name: Some("修边".to_string()),
            fraction_count: Some(2),
            valuation_factor: Some(0.9),
            allowance_factor: Some(1.1),
            raw_samples: Some("33.10; 32.84, abc, 33.02".to_string()),
            ..SkuPatch::default()
        },
    ) {
        tracing::error!("更新SKU失败: {}", err);
        return;
    }

    let result = api.regenerate_fraction_lists();
    tracing::info!(
        "重算完成: 总SKU={}, 有效={}, 降级={}, 耗时={}ms",
        result.total_skus,
        result.computed_skus,
        result.null_skus,
        result.elapsed_ms
    );

    let report = ReportApi::new();
    for row in report.sku_rows(api.study()) {
        println!(
            "{:<10} {:<8} TR={:<10} TE={:<10} 参与节拍={}",
            row.sku_id,
            row.operation_name,
            row.observed_display,
            row.standardized_display,
            row.include_in_rhythm
        );
    }
    println!("全局节拍时间: {}", report.global_rhythm_display(api.study()));
}
