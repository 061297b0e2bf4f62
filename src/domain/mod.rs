// ==========================================
// 企业成本核算引擎 - 领域模型层
// ==========================================
// 职责: 定义成本记录、产品、核算结果等领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod cost_record;
pub mod costing;
pub mod product;
pub mod types;

// 重导出核心类型
pub use cost_record::{
    CapitalExpenditure, DirectCost, DirectCostBasis, ExceptionalCost, FinancialCost,
    PeriodicCost, PersonnelCost, RiskCost, RiskProvisionBasis, SemiVariableCost, VariableCost,
};
pub use costing::{
    CostBreakdown, EnterpriseSummary, PriceAnalysis, ProductCostResult, SimulationDeltas,
    SimulationResult,
};
pub use product::Product;
pub use types::{AllocationBase, CostCategory, ExceptionalStatus, MarginBand};
