// ==========================================
// 企业成本核算引擎 - CLI 主入口
// ==========================================
// 用法: enterprise-costing [快照JSON路径]
// 默认读取 demos/enterprise_snapshot.json
// ==========================================

use enterprise_costing::{logging, CostingApi};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("企业成本核算引擎 - 决策支持核心");
    tracing::info!("系统版本: {}", enterprise_costing::VERSION);
    tracing::info!("==================================================");

    let snapshot_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/enterprise_snapshot.json".to_string());
    tracing::info!("使用快照: {}", snapshot_path);

    let api = CostingApi::from_file(&snapshot_path)?;

    // ===== 企业级汇总 =====
    let summary = api.get_enterprise_summary();
    tracing::info!(
        "产品{}个, 月总产量{:.0}件",
        summary.total_products,
        summary.total_units
    );
    tracing::info!("成本台账月度基盘: {:.2}", summary.total_monthly_costs);
    tracing::info!(
        "月收入 {:.2} / 月成本 {:.2} / 月利润 {:.2} / 整体毛利率 {:.1}% [{}]",
        summary.total_revenue,
        summary.total_cost,
        summary.total_profit,
        summary.overall_margin,
        summary.margin_band()
    );

    // ===== 产品明细 =====
    for result in api.list_product_costs() {
        tracing::info!(
            "{} ({}): 单件成本 {:.2} / 售价 {:.2} / 毛利率 {:.1}% [{}] / 月利润 {:.2}",
            result.product_name,
            result.sku,
            result.total_cost_per_unit,
            result.selling_price,
            result.gross_margin_percent,
            result.margin_band(),
            result.monthly_profit
        );
    }

    Ok(())
}
