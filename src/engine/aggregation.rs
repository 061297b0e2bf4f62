// ==========================================
// 企业成本核算引擎 - 类目汇总引擎
// ==========================================
// 职责: 将各类目成本记录归并为单一月度金额 (或单位费率)
// 红线: 无状态纯函数,与记录顺序无关,空记录集返回0
// ==========================================

use crate::domain::cost_record::{
    CapitalExpenditure, DirectCost, ExceptionalCost, FinancialCost, PeriodicCost, PersonnelCost,
    RiskCost, SemiVariableCost, VariableCost,
};

// ==========================================
// CostAggregator - 类目汇总引擎
// ==========================================
pub struct CostAggregator;

impl CostAggregator {
    /// 创建新的汇总引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 平周期类目 (金额已是月度口径)
    // ==========================================

    /// 固定成本月度总额
    pub fn total_fixed(&self, records: &[PeriodicCost]) -> f64 {
        self.sum_periodic(records)
    }

    /// 间接成本月度总额
    pub fn total_indirect(&self, records: &[PeriodicCost]) -> f64 {
        self.sum_periodic(records)
    }

    /// 运营费用 (OPEX) 月度总额
    pub fn total_opex(&self, records: &[PeriodicCost]) -> f64 {
        self.sum_periodic(records)
    }

    fn sum_periodic(&self, records: &[PeriodicCost]) -> f64 {
        records.iter().map(|c| c.amount).sum()
    }

    // ==========================================
    // 费率类目
    // ==========================================

    /// 单位变动成本费率合计
    ///
    /// 注意返回的是每件费率而非月度金额,下游乘以产量使用
    pub fn total_variable_per_unit(&self, records: &[VariableCost]) -> f64 {
        records.iter().map(|c| c.unit_cost).sum()
    }

    /// 半变动成本在指定产量下的月度总额
    pub fn total_semi_variable(&self, records: &[SemiVariableCost], units: f64) -> f64 {
        records.iter().map(|c| c.monthly_total(units)).sum()
    }

    /// 直接成本记录折算的单件成本合计 (台账口径,不进入产品核算)
    pub fn total_direct_per_unit(&self, records: &[DirectCost]) -> f64 {
        records.iter().map(|c| c.cost_per_unit()).sum()
    }

    // ==========================================
    // 折算类目
    // ==========================================

    /// CAPEX 月度折旧总额
    pub fn total_capex_depreciation(&self, records: &[CapitalExpenditure]) -> f64 {
        records.iter().map(|c| c.monthly_depreciation()).sum()
    }

    /// 人员成本月度总额
    pub fn total_personnel(&self, records: &[PersonnelCost]) -> f64 {
        records.iter().map(|c| c.monthly_total()).sum()
    }

    /// 财务成本月度总额
    pub fn total_financial(&self, records: &[FinancialCost]) -> f64 {
        records.iter().map(|c| c.amount).sum()
    }

    /// 风险准备金月度计提总额 (年度计提统一除以12)
    pub fn total_risk_provision(&self, records: &[RiskCost]) -> f64 {
        records.iter().map(|c| c.monthly_provision()).sum()
    }

    /// 例外成本有效金额合计 (独立口径,不进入月度成本基盘)
    pub fn total_exceptional(&self, records: &[ExceptionalCost]) -> f64 {
        records.iter().map(|c| c.effective_amount()).sum()
    }
}
