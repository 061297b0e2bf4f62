// ==========================================
// 企业成本核算引擎 - 核算结果对象
// ==========================================
// 职责: 定义引擎输出的派生结果 (从不持久化,每次读取重算)
// 红线: 结果对象只携带数据与只读辅助方法,不含核算逻辑
// ==========================================

use crate::domain::types::{CostCategory, MarginBand};
use serde::{Deserialize, Serialize};

// ==========================================
// CostBreakdown - 单件成本分解
// ==========================================
// 直接成本五项 + 变动/半变动 + 七项按份额分摊的管理费用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    // ===== 直接成本 =====
    pub direct_material: f64,
    pub direct_labor: f64,
    pub machine_time: f64,
    pub packaging: f64,
    pub shipping: f64,
    pub total_direct_cost: f64,

    // ===== 变动/半变动成本 =====
    pub variable_cost_per_unit: f64,
    pub semi_variable_per_unit: f64,

    // ===== 按产量份额分摊的管理费用 =====
    pub fixed_per_unit: f64,
    pub indirect_per_unit: f64,
    pub opex_per_unit: f64,
    pub depreciation_per_unit: f64,
    pub personnel_per_unit: f64,
    pub financial_per_unit: f64,
    pub risk_per_unit: f64,
}

impl CostBreakdown {
    /// 七项按份额分摊的管理费用分量 (产量变化时需要重定基的部分)
    pub fn share_allocated_components(&self) -> [(CostCategory, f64); 7] {
        [
            (CostCategory::Fixed, self.fixed_per_unit),
            (CostCategory::Indirect, self.indirect_per_unit),
            (CostCategory::OperatingExpense, self.opex_per_unit),
            (CostCategory::CapitalExpenditure, self.depreciation_per_unit),
            (CostCategory::Personnel, self.personnel_per_unit),
            (CostCategory::Financial, self.financial_per_unit),
            (CostCategory::Risk, self.risk_per_unit),
        ]
    }

    /// 份额分摊管理费用小计
    pub fn share_allocated_overhead_total(&self) -> f64 {
        self.share_allocated_components()
            .iter()
            .map(|(_, v)| v)
            .sum()
    }

    /// 全部非直接成本小计 (变动 + 份额分摊 + 半变动)
    pub fn overhead_per_unit_total(&self) -> f64 {
        self.variable_cost_per_unit
            + self.share_allocated_overhead_total()
            + self.semi_variable_per_unit
    }
}

// ==========================================
// ProductCostResult - 单产品完整核算结果
// ==========================================
// 扁平结构,所有中间量直接可读,下游无需重算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCostResult {
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub selling_price: f64,
    pub units_per_month: f64,

    pub breakdown: CostBreakdown,
    pub total_cost_per_unit: f64,

    // ===== 毛利 =====
    // 售价为0时毛利率为 NaN/∞,本层不守卫,由展示边界处理
    pub gross_margin: f64,
    pub gross_margin_percent: f64,

    // ===== 月度口径 =====
    pub monthly_revenue: f64,
    pub monthly_cost: f64,
    pub monthly_profit: f64,
}

impl ProductCostResult {
    /// 毛利健康度分级
    pub fn margin_band(&self) -> MarginBand {
        MarginBand::from_percent(self.gross_margin_percent)
    }
}

// ==========================================
// EnterpriseSummary - 企业级汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseSummary {
    // ===== 各类目月度总额 =====
    pub total_fixed: f64,
    pub total_variable: f64,      // 单位变动费率 × 总产量
    pub total_semi_variable: f64, // 按总产量口径
    pub total_indirect: f64,
    pub total_opex: f64,
    pub total_personnel: f64,
    pub total_financial: f64,
    pub total_risk: f64,
    pub monthly_depreciation: f64,

    /// 成本台账月度基盘 (不含产品直接成本)
    pub total_monthly_costs: f64,

    // ===== 产品口径汇总 =====
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    /// 总收入为0时取0,企业级指标不允许出现 NaN
    pub overall_margin: f64,

    pub total_products: usize,
    pub total_units: f64,
}

impl EnterpriseSummary {
    /// 整体毛利健康度分级
    pub fn margin_band(&self) -> MarginBand {
        MarginBand::from_percent(self.overall_margin)
    }
}

// ==========================================
// SimulationDeltas - 模拟扰动参数
// ==========================================
// 带符号百分比,常用范围 -50..+50
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimulationDeltas {
    #[serde(default)]
    pub price_change_percent: f64,
    #[serde(default)]
    pub volume_change_percent: f64,
    #[serde(default)]
    pub material_change_percent: f64,
    #[serde(default)]
    pub labor_change_percent: f64,
}

impl SimulationDeltas {
    /// 所有扰动参数是否为有限数
    pub fn is_finite(&self) -> bool {
        self.price_change_percent.is_finite()
            && self.volume_change_percent.is_finite()
            && self.material_change_percent.is_finite()
            && self.labor_change_percent.is_finite()
    }
}

// ==========================================
// SimulationResult - 模拟结果 (当前值与模拟值成对)
// ==========================================
// 只读投影,不写任何状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub product_id: String,

    pub original_price: f64,
    pub new_price: f64,

    pub original_cost: f64,
    pub new_cost: f64,

    pub original_margin: f64,
    pub new_margin: f64,

    pub original_margin_percent: f64,
    pub new_margin_percent: f64,

    pub original_volume: f64,
    pub new_volume: f64,

    pub original_profit: f64,
    pub new_profit: f64,
}

impl SimulationResult {
    /// 月度利润变化量
    pub fn profit_delta(&self) -> f64 {
        self.new_profit - self.original_profit
    }
}

// ==========================================
// PriceAnalysis - 售价分析结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAnalysis {
    pub product_id: String,
    pub cost: f64,
    pub price: f64,
    pub profit: f64,
    pub margin_percent: f64, // 售价<=0时取0
    pub markup_percent: f64, // 成本<=0时取0
    pub target_margin_percent: f64,
    pub recommended_price: f64, // 成本<=0时取0
    pub recommended_profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_breakdown() -> CostBreakdown {
        CostBreakdown {
            direct_material: 125.0,
            direct_labor: 99.75,
            machine_time: 81.0,
            packaging: 8.5,
            shipping: 12.0,
            total_direct_cost: 326.25,
            variable_cost_per_unit: 10.0,
            semi_variable_per_unit: 3.0,
            fixed_per_unit: 7.0,
            indirect_per_unit: 6.0,
            opex_per_unit: 5.0,
            depreciation_per_unit: 4.0,
            personnel_per_unit: 3.0,
            financial_per_unit: 2.0,
            risk_per_unit: 1.0,
        }
    }

    #[test]
    fn test_share_allocated_overhead_total() {
        let breakdown = make_breakdown();
        // 7 + 6 + 5 + 4 + 3 + 2 + 1 = 28
        assert!((breakdown.share_allocated_overhead_total() - 28.0).abs() < 1e-9);
        assert_eq!(breakdown.share_allocated_components().len(), 7);
    }

    #[test]
    fn test_overhead_per_unit_total() {
        let breakdown = make_breakdown();
        // 10 + 28 + 3 = 41
        assert!((breakdown.overhead_per_unit_total() - 41.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_deltas_finite_check() {
        let ok = SimulationDeltas {
            price_change_percent: -50.0,
            volume_change_percent: 50.0,
            material_change_percent: 0.0,
            labor_change_percent: 12.5,
        };
        assert!(ok.is_finite());

        let bad = SimulationDeltas {
            price_change_percent: f64::NAN,
            ..SimulationDeltas::default()
        };
        assert!(!bad.is_finite());
    }
}
