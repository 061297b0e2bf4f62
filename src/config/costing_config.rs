use crate::domain::types::AllocationBase;
use serde::{Deserialize, Serialize};

/// 核算配置
///
/// 全局工时/机时费率,应用于所有产品的直接人工与机时成本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostingConfig {
    /// 直接人工时薪
    #[serde(default = "default_labor_hourly_rate")]
    pub labor_hourly_rate: f64,

    /// 机时费率
    #[serde(default = "default_machine_hourly_rate")]
    pub machine_hourly_rate: f64,

    /// 管理费用分摊基准 (当前仅产量基准生效)
    #[serde(default)]
    pub overhead_allocation_base: AllocationBase,
}

fn default_labor_hourly_rate() -> f64 {
    28.5
}

fn default_machine_hourly_rate() -> f64 {
    45.0
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            labor_hourly_rate: default_labor_hourly_rate(),
            machine_hourly_rate: default_machine_hourly_rate(),
            overhead_allocation_base: AllocationBase::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let config = CostingConfig::default();
        assert!((config.labor_hourly_rate - 28.5).abs() < 1e-9);
        assert!((config.machine_hourly_rate - 45.0).abs() < 1e-9);
        assert_eq!(
            config.overhead_allocation_base,
            AllocationBase::ProductionVolume
        );
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: CostingConfig =
            serde_json::from_str(r#"{ "labor_hourly_rate": 30.0 }"#).unwrap();
        assert!((config.labor_hourly_rate - 30.0).abs() < 1e-9);
        assert!((config.machine_hourly_rate - 45.0).abs() < 1e-9);
    }
}
