// ==========================================
// 企业成本核算引擎 - 日志系统初始化
// ==========================================
// 使用 tracing + tracing-subscriber
// 核心库本身只通过 tracing 宏发日志,订阅器由宿主进程选择;
// 本模块提供 CLI 与测试两个现成的初始化入口
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化 CLI 进程的日志订阅器
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器 (默认: info)
///   例如: RUST_LOG=debug 或 RUST_LOG=enterprise_costing=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).compact().init();
}

/// 初始化测试环境的日志订阅器
///
/// 输出交给测试捕获器,重复初始化静默忽略
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
