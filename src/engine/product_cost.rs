// ==========================================
// 企业成本核算引擎 - 产品成本核算引擎
// ==========================================
// 职责: 为单个产品生成完整的单件成本、毛利与月度口径结果
// 输入: 成本台账快照 + 产品ID
// 输出: ProductCostResult (扁平结构,含全部中间量)
// 红线: 纯函数,不写任何状态;产品不存在返回 None
// ==========================================

use crate::domain::costing::{CostBreakdown, ProductCostResult};
use crate::engine::aggregation::CostAggregator;
use crate::engine::allocation::AllocationEngine;
use crate::repository::snapshot::CostSnapshot;

// ==========================================
// ProductCostEngine - 产品成本核算引擎
// ==========================================
pub struct ProductCostEngine;

impl ProductCostEngine {
    /// 创建新的核算引擎
    pub fn new() -> Self {
        Self
    }

    /// 核算单个产品的完整成本
    ///
    /// # 参数
    /// - `snapshot`: 成本台账时点快照
    /// - `product_id`: 产品ID
    ///
    /// # 返回
    /// 产品不存在时返回 None;
    /// 总产量为0或产品产量为0时各分摊项为 NaN/∞ (不守卫)
    pub fn calculate(&self, snapshot: &CostSnapshot, product_id: &str) -> Option<ProductCostResult> {
        let product = snapshot.find_product(product_id)?;

        let aggregator = CostAggregator::new();
        let allocator = AllocationEngine::new();
        let total_units = snapshot.total_units_per_month();

        // ===== 直接成本 =====
        let direct_material = product.direct_material_cost;
        let direct_labor = product.direct_labor_hours * snapshot.config.labor_hourly_rate;
        let machine_time = product.machine_hours * snapshot.config.machine_hourly_rate;
        let packaging = product.packaging_cost;
        let shipping = product.shipping_cost;
        let total_direct_cost = direct_material + direct_labor + machine_time + packaging + shipping;

        // ===== 变动成本 (本身即单件费率) =====
        let variable_cost_per_unit = aggregator.total_variable_per_unit(&snapshot.variable_costs);

        // ===== 按产量份额分摊的七项管理费用 =====
        let fixed_per_unit = allocator.per_unit_allocation(
            aggregator.total_fixed(&snapshot.fixed_costs),
            product.units_per_month,
            total_units,
        );
        let indirect_per_unit = allocator.per_unit_allocation(
            aggregator.total_indirect(&snapshot.indirect_costs),
            product.units_per_month,
            total_units,
        );
        let opex_per_unit = allocator.per_unit_allocation(
            aggregator.total_opex(&snapshot.operating_expenses),
            product.units_per_month,
            total_units,
        );
        let depreciation_per_unit = allocator.per_unit_allocation(
            aggregator.total_capex_depreciation(&snapshot.capital_expenditures),
            product.units_per_month,
            total_units,
        );
        let personnel_per_unit = allocator.per_unit_allocation(
            aggregator.total_personnel(&snapshot.personnel_costs),
            product.units_per_month,
            total_units,
        );
        let financial_per_unit = allocator.per_unit_allocation(
            aggregator.total_financial(&snapshot.financial_costs),
            product.units_per_month,
            total_units,
        );
        let risk_per_unit = allocator.per_unit_allocation(
            aggregator.total_risk_provision(&snapshot.risk_costs),
            product.units_per_month,
            total_units,
        );

        // ===== 半变动成本 =====
        // 不按份额分摊: 公式本身含产量项,按产品自身产量计算后摊回自身
        let semi_variable_total =
            aggregator.total_semi_variable(&snapshot.semi_variable_costs, product.units_per_month);
        let semi_variable_per_unit = semi_variable_total / product.units_per_month;

        // ===== 单件总成本 =====
        let total_cost_per_unit = total_direct_cost
            + variable_cost_per_unit
            + fixed_per_unit
            + indirect_per_unit
            + opex_per_unit
            + depreciation_per_unit
            + personnel_per_unit
            + financial_per_unit
            + risk_per_unit
            + semi_variable_per_unit;

        // ===== 毛利 (售价为0时为 NaN/∞,不守卫) =====
        let gross_margin = product.selling_price - total_cost_per_unit;
        let gross_margin_percent = gross_margin / product.selling_price * 100.0;

        tracing::debug!(
            "产品核算完成: {} 单件成本={:.2} 毛利率={:.1}%",
            product_id,
            total_cost_per_unit,
            gross_margin_percent
        );

        Some(ProductCostResult {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            sku: product.sku.clone(),
            selling_price: product.selling_price,
            units_per_month: product.units_per_month,
            breakdown: CostBreakdown {
                direct_material,
                direct_labor,
                machine_time,
                packaging,
                shipping,
                total_direct_cost,
                variable_cost_per_unit,
                semi_variable_per_unit,
                fixed_per_unit,
                indirect_per_unit,
                opex_per_unit,
                depreciation_per_unit,
                personnel_per_unit,
                financial_per_unit,
                risk_per_unit,
            },
            total_cost_per_unit,
            gross_margin,
            gross_margin_percent,
            monthly_revenue: product.selling_price * product.units_per_month,
            monthly_cost: total_cost_per_unit * product.units_per_month,
            monthly_profit: gross_margin * product.units_per_month,
        })
    }

    /// 核算全部产品 (跳过不可核算的条目)
    pub fn calculate_all(&self, snapshot: &CostSnapshot) -> Vec<ProductCostResult> {
        snapshot
            .products
            .iter()
            .filter_map(|p| self.calculate(snapshot, &p.id))
            .collect()
    }
}
