// ==========================================
// 企业成本核算引擎 - 配置层
// ==========================================
// 职责: 核算配置对象 (费率与分摊基准)
// ==========================================

pub mod costing_config;

pub use costing_config::CostingConfig;
