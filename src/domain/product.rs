// ==========================================
// 企业成本核算引擎 - 产品领域模型
// ==========================================

use serde::{Deserialize, Serialize};

/// 产品目录条目
///
/// 约束: 参与分摊计算时 units_per_month 必须大于0,
/// 该前置条件由调用方保证 (引擎不做除零守卫)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub selling_price: f64,
    pub units_per_month: f64,

    // ===== 直接成本驱动因子 =====
    #[serde(default)]
    pub direct_material_cost: f64, // 单件直接材料
    #[serde(default)]
    pub direct_labor_hours: f64,   // 单件直接工时
    #[serde(default)]
    pub machine_hours: f64,        // 单件机时
    #[serde(default)]
    pub packaging_cost: f64,       // 单件包装
    #[serde(default)]
    pub shipping_cost: f64,        // 单件运输
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_defaults_missing_drivers_to_zero() {
        let json = r#"{
            "id": "prd-x",
            "name": "Bare Product",
            "selling_price": 100.0,
            "units_per_month": 10.0
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sku, "");
        assert_eq!(product.direct_material_cost, 0.0);
        assert_eq!(product.packaging_cost, 0.0);
    }
}
