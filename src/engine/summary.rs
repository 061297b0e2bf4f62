// ==========================================
// 企业成本核算引擎 - 企业级汇总引擎
// ==========================================
// 职责: 把各类目总额与全部产品核算结果卷积为企业级指标
// 红线: 企业级毛利率在总收入为0时取0,不向驾驶舱传播 NaN
//       (与产品级不守卫策略刻意不同,两条分支均有测试钉住)
// ==========================================

use crate::domain::costing::EnterpriseSummary;
use crate::engine::aggregation::CostAggregator;
use crate::engine::product_cost::ProductCostEngine;
use crate::repository::snapshot::CostSnapshot;

// ==========================================
// EnterpriseSummaryEngine - 企业级汇总引擎
// ==========================================
pub struct EnterpriseSummaryEngine;

impl EnterpriseSummaryEngine {
    /// 创建新的汇总引擎
    pub fn new() -> Self {
        Self
    }

    /// 生成企业级汇总
    pub fn summarize(&self, snapshot: &CostSnapshot) -> EnterpriseSummary {
        let aggregator = CostAggregator::new();
        let cost_engine = ProductCostEngine::new();

        let total_fixed = aggregator.total_fixed(&snapshot.fixed_costs);
        let total_indirect = aggregator.total_indirect(&snapshot.indirect_costs);
        let total_opex = aggregator.total_opex(&snapshot.operating_expenses);
        let total_personnel = aggregator.total_personnel(&snapshot.personnel_costs);
        let total_financial = aggregator.total_financial(&snapshot.financial_costs);
        let total_risk = aggregator.total_risk_provision(&snapshot.risk_costs);
        let monthly_depreciation =
            aggregator.total_capex_depreciation(&snapshot.capital_expenditures);

        let total_units = snapshot.total_units_per_month();
        let total_semi_variable =
            aggregator.total_semi_variable(&snapshot.semi_variable_costs, total_units);
        let total_variable =
            aggregator.total_variable_per_unit(&snapshot.variable_costs) * total_units;

        // 成本台账月度基盘 (不含产品直接成本)
        let total_monthly_costs = total_fixed
            + total_indirect
            + total_opex
            + total_personnel
            + total_financial
            + total_risk
            + monthly_depreciation
            + total_semi_variable
            + total_variable;

        // ===== 产品口径自下而上卷积 =====
        let mut total_revenue = 0.0;
        let mut total_cost = 0.0;
        for result in cost_engine.calculate_all(snapshot) {
            total_revenue += result.monthly_revenue;
            total_cost += result.monthly_cost;
        }

        let total_profit = total_revenue - total_cost;
        let overall_margin = if total_revenue > 0.0 {
            total_profit / total_revenue * 100.0
        } else {
            0.0
        };

        tracing::debug!(
            "企业汇总完成: 产品{}个 月收入={:.2} 月成本={:.2} 整体毛利率={:.1}%",
            snapshot.product_count(),
            total_revenue,
            total_cost,
            overall_margin
        );

        EnterpriseSummary {
            total_fixed,
            total_variable,
            total_semi_variable,
            total_indirect,
            total_opex,
            total_personnel,
            total_financial,
            total_risk,
            monthly_depreciation,
            total_monthly_costs,
            total_revenue,
            total_cost,
            total_profit,
            overall_margin,
            total_products: snapshot.product_count(),
            total_units,
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost_record::PeriodicCost;
    use crate::domain::product::Product;

    fn make_product(id: &str, price: f64, units: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            sku: String::new(),
            selling_price: price,
            units_per_month: units,
            direct_material_cost: 10.0,
            direct_labor_hours: 1.0,
            machine_hours: 0.5,
            packaging_cost: 1.0,
            shipping_cost: 2.0,
        }
    }

    #[test]
    fn test_empty_snapshot_summary_is_all_zero() {
        let engine = EnterpriseSummaryEngine::new();
        let summary = engine.summarize(&CostSnapshot::default());

        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_units, 0.0);
        assert_eq!(summary.total_monthly_costs, 0.0);
        assert_eq!(summary.total_revenue, 0.0);
        // 总收入为0时整体毛利率取0而不是 NaN
        assert_eq!(summary.overall_margin, 0.0);
    }

    #[test]
    fn test_monthly_cost_base_composition() {
        let engine = EnterpriseSummaryEngine::new();
        let snapshot = CostSnapshot {
            fixed_costs: vec![PeriodicCost {
                id: "fc-001".to_string(),
                name: "Office Rent".to_string(),
                category: "Facilities".to_string(),
                amount: 15_000.0,
                period: "monthly".to_string(),
                description: None,
            }],
            indirect_costs: vec![PeriodicCost {
                id: "ic-001".to_string(),
                name: "Supervision".to_string(),
                category: "Labor".to_string(),
                amount: 12_000.0,
                period: "monthly".to_string(),
                description: None,
            }],
            products: vec![make_product("prd-001", 100.0, 1000.0)],
            ..CostSnapshot::default()
        };

        let summary = engine.summarize(&snapshot);
        assert!((summary.total_monthly_costs - 27_000.0).abs() < 1e-9);
        assert_eq!(summary.total_products, 1);
    }

    #[test]
    fn test_summary_margin_floored_without_revenue() {
        let engine = EnterpriseSummaryEngine::new();
        let snapshot = CostSnapshot {
            products: vec![make_product("prd-001", 0.0, 1000.0)],
            ..CostSnapshot::default()
        };

        let summary = engine.summarize(&snapshot);

        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.total_cost > 0.0);
        // 产品级毛利率此时是 -∞,企业级被压平为0
        assert_eq!(summary.overall_margin, 0.0);
    }
}
