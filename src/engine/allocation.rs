// ==========================================
// 企业成本核算引擎 - 分摊引擎
// ==========================================
// 职责: 把企业级月度管理费用总额折算为单个产品的单件分摊额
// 红线: 不做除零守卫 —— 调用方必须保证至少存在一个正产量产品,
//       总产量为0时结果为 NaN/∞,由展示边界处理
// ==========================================

// ==========================================
// AllocationEngine - 产量份额分摊引擎
// ==========================================
pub struct AllocationEngine;

impl AllocationEngine {
    /// 创建新的分摊引擎
    pub fn new() -> Self {
        Self
    }

    /// 产品产量份额
    pub fn volume_share(&self, product_units: f64, total_units: f64) -> f64 {
        product_units / total_units
    }

    /// 单件分摊额
    ///
    /// 两步式: 总额 × 产量份额,再除以产品自身产量。
    /// 代数上恒等于 总额/总产量,保留两步式是为了兼容
    /// 配置中预留的非产量分摊基准 (见 AllocationBase)。
    pub fn per_unit_allocation(
        &self,
        overhead_total: f64,
        product_units: f64,
        total_units: f64,
    ) -> f64 {
        let share = self.volume_share(product_units, total_units);
        (overhead_total * share) / product_units
    }
}
