// ==========================================
// 企业成本核算引擎 - 核心库
// ==========================================
// 系统定位: 制造管理系统的成本分摊与产品成本核算核心
// 计算模型: 一致时点快照 + 无状态纯函数引擎
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 快照读取
pub mod repository;

// 引擎层 - 核算规则
pub mod engine;

// 配置层 - 费率与分摊基准
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AllocationBase, CostCategory, ExceptionalStatus, MarginBand};

// 领域实体
pub use domain::{
    CapitalExpenditure, DirectCost, DirectCostBasis, ExceptionalCost, FinancialCost,
    PeriodicCost, PersonnelCost, Product, RiskCost, RiskProvisionBasis, SemiVariableCost,
    VariableCost,
};

// 核算结果
pub use domain::{
    CostBreakdown, EnterpriseSummary, PriceAnalysis, ProductCostResult, SimulationDeltas,
    SimulationResult,
};

// 仓储
pub use repository::{CostSnapshot, RepositoryError, RepositoryResult};

// 引擎
pub use engine::{
    AllocationEngine, CostAggregator, EnterpriseSummaryEngine, PricingAnalyzer,
    ProductCostEngine, WhatIfSimulator,
};

// 配置
pub use config::CostingConfig;

// API
pub use api::{ApiError, ApiResult, CostingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "企业成本核算引擎";
