// ==========================================
// 企业成本核算引擎 - What-If 模拟引擎
// ==========================================
// 职责: 在价格/产量/材料/人工四个维度上按百分比扰动,
//       重算单件成本、毛利与月度利润
// 红线: 只读投影,不写任何状态
// ==========================================
// 产量重定基规则:
// - 七项份额分摊管理费用原为 总额/总产量,产量乘数变化时
//   按 分量/产量乘数 重定基 (增产摊薄,减产集中)
// - 机时/包装/运输/变动/半变动本质是单件口径,不随产量重定基
// - 产量乘数<=0时分摊项压平为0,避免 ±∞ 进入对比视图
// ==========================================

use crate::domain::costing::{ProductCostResult, SimulationDeltas, SimulationResult};

// ==========================================
// WhatIfSimulator - What-If 模拟引擎
// ==========================================
pub struct WhatIfSimulator;

impl WhatIfSimulator {
    /// 创建新的模拟引擎
    pub fn new() -> Self {
        Self
    }

    /// 基于现有核算结果做扰动模拟
    ///
    /// # 参数
    /// - `current`: 产品当前核算结果
    /// - `deltas`: 四维带符号百分比扰动
    ///
    /// # 返回
    /// 当前值与模拟值成对的对比结果
    pub fn simulate(
        &self,
        current: &ProductCostResult,
        deltas: &SimulationDeltas,
    ) -> SimulationResult {
        let price_multiplier = 1.0 + deltas.price_change_percent / 100.0;
        let volume_multiplier = 1.0 + deltas.volume_change_percent / 100.0;
        let material_multiplier = 1.0 + deltas.material_change_percent / 100.0;
        let labor_multiplier = 1.0 + deltas.labor_change_percent / 100.0;

        let new_price = current.selling_price * price_multiplier;
        let new_volume = current.units_per_month * volume_multiplier;

        let bd = &current.breakdown;
        let new_direct_material = bd.direct_material * material_multiplier;
        let new_direct_labor = bd.direct_labor * labor_multiplier;

        let rebase = |allocated_per_unit: f64| {
            if volume_multiplier > 0.0 {
                allocated_per_unit / volume_multiplier
            } else {
                0.0
            }
        };

        // 求和顺序与产品核算引擎保持一致,
        // 零扰动模拟必须逐位还原当前单件成本
        let new_cost = new_direct_material
            + new_direct_labor
            + bd.machine_time
            + bd.packaging
            + bd.shipping
            + bd.variable_cost_per_unit
            + rebase(bd.fixed_per_unit)
            + rebase(bd.indirect_per_unit)
            + rebase(bd.opex_per_unit)
            + rebase(bd.depreciation_per_unit)
            + rebase(bd.personnel_per_unit)
            + rebase(bd.financial_per_unit)
            + rebase(bd.risk_per_unit)
            + bd.semi_variable_per_unit;

        let new_margin = new_price - new_cost;
        let new_margin_percent = if new_price > 0.0 {
            new_margin / new_price * 100.0
        } else {
            0.0
        };
        let new_profit = new_margin * new_volume;

        tracing::debug!(
            "模拟完成: {} 成本 {:.2}→{:.2} 月利润 {:.2}→{:.2}",
            current.product_id,
            current.total_cost_per_unit,
            new_cost,
            current.monthly_profit,
            new_profit
        );

        SimulationResult {
            product_id: current.product_id.clone(),
            original_price: current.selling_price,
            new_price,
            original_cost: current.total_cost_per_unit,
            new_cost,
            original_margin: current.gross_margin,
            new_margin,
            original_margin_percent: current.gross_margin_percent,
            new_margin_percent,
            original_volume: current.units_per_month,
            new_volume,
            original_profit: current.monthly_profit,
            new_profit,
        }
    }
}
