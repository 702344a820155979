// ==========================================
// 工时测定与产线平衡系统 - 日志系统初始化
// ==========================================
// 工具: tracing + tracing-subscriber
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// 日志级别由 RUST_LOG 环境变量控制, 默认 info。
/// 例如: RUST_LOG=time_motion_study=debug
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// 初始化测试环境的日志系统 (可重复调用)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
