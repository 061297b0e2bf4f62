// ==========================================
// 企业成本核算引擎 - 售价分析引擎
// ==========================================
// 职责: 基于完整单件成本评估现价盈利能力,
//       并按目标毛利率反推建议售价
// ==========================================

use crate::domain::costing::{PriceAnalysis, ProductCostResult};

// ==========================================
// PricingAnalyzer - 售价分析引擎
// ==========================================
pub struct PricingAnalyzer;

impl PricingAnalyzer {
    /// 创建新的售价分析引擎
    pub fn new() -> Self {
        Self
    }

    /// 分析现价盈利能力并给出目标毛利率下的建议售价
    ///
    /// # 参数
    /// - `current`: 产品当前核算结果
    /// - `target_margin_percent`: 目标毛利率 (调用方保证 < 100)
    pub fn analyze(
        &self,
        current: &ProductCostResult,
        target_margin_percent: f64,
    ) -> PriceAnalysis {
        let cost = current.total_cost_per_unit;
        let price = current.selling_price;
        let profit = price - cost;

        let margin_percent = if price > 0.0 {
            profit / price * 100.0
        } else {
            0.0
        };
        let markup_percent = if cost > 0.0 { profit / cost * 100.0 } else { 0.0 };

        // 建议售价 = 成本 / (1 - 目标毛利率)
        let recommended_price = if cost > 0.0 {
            cost / (1.0 - target_margin_percent / 100.0)
        } else {
            0.0
        };
        let recommended_profit = recommended_price - cost;

        PriceAnalysis {
            product_id: current.product_id.clone(),
            cost,
            price,
            profit,
            margin_percent,
            markup_percent,
            target_margin_percent,
            recommended_price,
            recommended_profit,
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::costing::CostBreakdown;

    fn make_result(price: f64, cost: f64) -> ProductCostResult {
        ProductCostResult {
            product_id: "prd-001".to_string(),
            product_name: "Industrial Controller Unit".to_string(),
            sku: "ICU-2026-A".to_string(),
            selling_price: price,
            units_per_month: 850.0,
            breakdown: CostBreakdown {
                direct_material: cost,
                direct_labor: 0.0,
                machine_time: 0.0,
                packaging: 0.0,
                shipping: 0.0,
                total_direct_cost: cost,
                variable_cost_per_unit: 0.0,
                semi_variable_per_unit: 0.0,
                fixed_per_unit: 0.0,
                indirect_per_unit: 0.0,
                opex_per_unit: 0.0,
                depreciation_per_unit: 0.0,
                personnel_per_unit: 0.0,
                financial_per_unit: 0.0,
                risk_per_unit: 0.0,
            },
            total_cost_per_unit: cost,
            gross_margin: price - cost,
            gross_margin_percent: (price - cost) / price * 100.0,
            monthly_revenue: price * 850.0,
            monthly_cost: cost * 850.0,
            monthly_profit: (price - cost) * 850.0,
        }
    }

    #[test]
    fn test_margin_and_markup() {
        let analyzer = PricingAnalyzer::new();
        let analysis = analyzer.analyze(&make_result(200.0, 160.0), 25.0);

        assert!((analysis.profit - 40.0).abs() < 1e-9);
        // 毛利率 = 40/200 = 20%, 加成率 = 40/160 = 25%
        assert!((analysis.margin_percent - 20.0).abs() < 1e-9);
        assert!((analysis.markup_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommended_price_hits_target_margin() {
        let analyzer = PricingAnalyzer::new();
        let analysis = analyzer.analyze(&make_result(200.0, 160.0), 25.0);

        // 160 / (1 - 0.25) = 213.33
        assert!((analysis.recommended_price - 160.0 / 0.75).abs() < 1e-9);

        // 建议售价回验: 实际毛利率等于目标
        let achieved =
            (analysis.recommended_price - analysis.cost) / analysis.recommended_price * 100.0;
        assert!((achieved - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_price_and_zero_cost_guards() {
        let analyzer = PricingAnalyzer::new();

        let no_price = analyzer.analyze(&make_result(0.0, 160.0), 25.0);
        assert_eq!(no_price.margin_percent, 0.0);

        let no_cost = analyzer.analyze(&make_result(200.0, 0.0), 25.0);
        assert_eq!(no_cost.markup_percent, 0.0);
        assert_eq!(no_cost.recommended_price, 0.0);
    }
}
