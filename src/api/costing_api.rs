// ==========================================
// 企业成本核算引擎 - 核算 API
// ==========================================
// 职责: 在一份成本台账快照之上提供带输入校验的业务接口
// 架构: API 层 → 引擎层 (纯函数) → 快照 (只读)
// 红线: 本层只做输入校验与错误映射,核算规则全部在引擎层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::costing::{
    EnterpriseSummary, PriceAnalysis, ProductCostResult, SimulationDeltas, SimulationResult,
};
use crate::engine::aggregation::CostAggregator;
use crate::engine::pricing::PricingAnalyzer;
use crate::engine::product_cost::ProductCostEngine;
use crate::engine::simulation::WhatIfSimulator;
use crate::engine::summary::EnterpriseSummaryEngine;
use crate::repository::snapshot::CostSnapshot;
use std::path::Path;

// ==========================================
// CostingApi - 核算 API
// ==========================================

/// 核算API
///
/// 持有一份只读快照;快照更新即重建API实例
/// (每次调用都在同一时点数据上完成,天然一致)
pub struct CostingApi {
    snapshot: CostSnapshot,
    cost_engine: ProductCostEngine,
    summary_engine: EnterpriseSummaryEngine,
    simulator: WhatIfSimulator,
    pricing: PricingAnalyzer,
    aggregator: CostAggregator,
}

impl CostingApi {
    /// 基于内存快照创建API实例
    pub fn new(snapshot: CostSnapshot) -> Self {
        Self {
            snapshot,
            cost_engine: ProductCostEngine::new(),
            summary_engine: EnterpriseSummaryEngine::new(),
            simulator: WhatIfSimulator::new(),
            pricing: PricingAnalyzer::new(),
            aggregator: CostAggregator::new(),
        }
    }

    /// 从快照JSON文件创建API实例
    pub fn from_file<P: AsRef<Path>>(path: P) -> ApiResult<Self> {
        let snapshot = CostSnapshot::load_from_file(path)?;
        Ok(Self::new(snapshot))
    }

    /// 只读访问当前快照
    pub fn snapshot(&self) -> &CostSnapshot {
        &self.snapshot
    }

    // ==========================================
    // 产品核算接口
    // ==========================================

    /// 核算单个产品的完整成本
    ///
    /// # 返回
    /// - Ok(ProductCostResult): 完整核算结果
    /// - Err(ApiError::InvalidInput): 产品ID为空
    /// - Err(ApiError::NotFound): 产品不存在
    pub fn calculate_product_cost(&self, product_id: &str) -> ApiResult<ProductCostResult> {
        if product_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("产品ID不能为空".to_string()));
        }

        self.cost_engine
            .calculate(&self.snapshot, product_id)
            .ok_or_else(|| ApiError::NotFound(format!("产品(id={})不存在", product_id)))
    }

    /// 核算全部产品 (对比表视图)
    pub fn list_product_costs(&self) -> Vec<ProductCostResult> {
        self.cost_engine.calculate_all(&self.snapshot)
    }

    /// 企业级汇总
    pub fn get_enterprise_summary(&self) -> EnterpriseSummary {
        self.summary_engine.summarize(&self.snapshot)
    }

    // ==========================================
    // What-If 模拟接口
    // ==========================================

    /// 对单个产品做四维百分比扰动模拟
    ///
    /// # 返回
    /// - Ok(SimulationResult): 当前值与模拟值成对的对比结果
    /// - Err(ApiError::InvalidInput): 扰动参数非有限数或产品ID为空
    /// - Err(ApiError::NotFound): 产品不存在
    pub fn simulate(
        &self,
        product_id: &str,
        deltas: &SimulationDeltas,
    ) -> ApiResult<SimulationResult> {
        if !deltas.is_finite() {
            return Err(ApiError::InvalidInput(
                "模拟扰动参数必须为有限数".to_string(),
            ));
        }

        let current = self.calculate_product_cost(product_id)?;
        Ok(self.simulator.simulate(&current, deltas))
    }

    /// 售价分析 (目标毛利率反推建议售价)
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 目标毛利率不在 [0, 100) 区间
    pub fn analyze_price(
        &self,
        product_id: &str,
        target_margin_percent: f64,
    ) -> ApiResult<PriceAnalysis> {
        if !target_margin_percent.is_finite()
            || !(0.0..100.0).contains(&target_margin_percent)
        {
            return Err(ApiError::InvalidInput(format!(
                "目标毛利率必须在 [0, 100) 区间: {}",
                target_margin_percent
            )));
        }

        let current = self.calculate_product_cost(product_id)?;
        Ok(self.pricing.analyze(&current, target_margin_percent))
    }

    // ==========================================
    // 类目汇总只读接口
    // ==========================================

    /// 固定成本月度总额
    pub fn total_fixed(&self) -> f64 {
        self.aggregator.total_fixed(&self.snapshot.fixed_costs)
    }

    /// 单位变动成本费率合计
    pub fn total_variable_per_unit(&self) -> f64 {
        self.aggregator
            .total_variable_per_unit(&self.snapshot.variable_costs)
    }

    /// 半变动成本在指定产量下的月度总额
    pub fn total_semi_variable(&self, units: f64) -> f64 {
        self.aggregator
            .total_semi_variable(&self.snapshot.semi_variable_costs, units)
    }

    /// 间接成本月度总额
    pub fn total_indirect(&self) -> f64 {
        self.aggregator.total_indirect(&self.snapshot.indirect_costs)
    }

    /// 运营费用月度总额
    pub fn total_opex(&self) -> f64 {
        self.aggregator.total_opex(&self.snapshot.operating_expenses)
    }

    /// CAPEX 月度折旧总额
    pub fn total_capex_depreciation(&self) -> f64 {
        self.aggregator
            .total_capex_depreciation(&self.snapshot.capital_expenditures)
    }

    /// 人员成本月度总额
    pub fn total_personnel(&self) -> f64 {
        self.aggregator.total_personnel(&self.snapshot.personnel_costs)
    }

    /// 财务成本月度总额
    pub fn total_financial(&self) -> f64 {
        self.aggregator.total_financial(&self.snapshot.financial_costs)
    }

    /// 风险准备金月度计提总额
    pub fn total_risk_provision(&self) -> f64 {
        self.aggregator.total_risk_provision(&self.snapshot.risk_costs)
    }

    /// 直接成本记录折算的单件成本合计 (台账口径)
    pub fn total_direct_per_unit(&self) -> f64 {
        self.aggregator.total_direct_per_unit(&self.snapshot.direct_costs)
    }

    /// 例外成本有效金额合计 (独立口径)
    pub fn total_exceptional(&self) -> f64 {
        self.aggregator
            .total_exceptional(&self.snapshot.exceptional_costs)
    }
}
