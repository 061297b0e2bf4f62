// ==========================================
// 企业成本核算引擎 - 领域类型定义
// ==========================================
// 职责: 定义成本类目、毛利等级等基础枚举
// 红线: 枚举序列化格式统一为 SCREAMING_SNAKE_CASE
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 成本类目 (Cost Category)
// ==========================================
// 成本台账的分类维度,产品核算按类目汇总与分摊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostCategory {
    Fixed,              // 固定成本
    Variable,           // 变动成本
    SemiVariable,       // 半变动成本
    Direct,             // 直接成本
    Indirect,           // 间接成本
    OperatingExpense,   // 运营费用 (OPEX)
    CapitalExpenditure, // 资本支出 (CAPEX, 按月折旧)
    Personnel,          // 人员成本
    Financial,          // 财务成本
    Risk,               // 风险准备金
    Exceptional,        // 例外成本 (不参与分摊)
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostCategory::Fixed => write!(f, "FIXED"),
            CostCategory::Variable => write!(f, "VARIABLE"),
            CostCategory::SemiVariable => write!(f, "SEMI_VARIABLE"),
            CostCategory::Direct => write!(f, "DIRECT"),
            CostCategory::Indirect => write!(f, "INDIRECT"),
            CostCategory::OperatingExpense => write!(f, "OPERATING_EXPENSE"),
            CostCategory::CapitalExpenditure => write!(f, "CAPITAL_EXPENDITURE"),
            CostCategory::Personnel => write!(f, "PERSONNEL"),
            CostCategory::Financial => write!(f, "FINANCIAL"),
            CostCategory::Risk => write!(f, "RISK"),
            CostCategory::Exceptional => write!(f, "EXCEPTIONAL"),
        }
    }
}

// ==========================================
// 毛利等级 (Margin Band)
// ==========================================
// 阈值: >=15% 良好, >=5% 可接受, 其余为警戒
// 顺序: Critical < Acceptable < Good
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginBand {
    Critical,   // 警戒
    Acceptable, // 可接受
    Good,       // 良好
}

impl MarginBand {
    /// 按毛利率百分比分级
    ///
    /// NaN 视为警戒 (不可计算的毛利不允许显示为健康)
    pub fn from_percent(margin_percent: f64) -> Self {
        if margin_percent >= 15.0 {
            MarginBand::Good
        } else if margin_percent >= 5.0 {
            MarginBand::Acceptable
        } else {
            MarginBand::Critical
        }
    }
}

impl fmt::Display for MarginBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginBand::Critical => write!(f, "CRITICAL"),
            MarginBand::Acceptable => write!(f, "ACCEPTABLE"),
            MarginBand::Good => write!(f, "GOOD"),
        }
    }
}

// ==========================================
// 例外成本状态 (Exceptional Cost Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExceptionalStatus {
    Resolved,    // 已发生并处理完毕
    Provisioned, // 已计提准备金,尚未发生
}

impl fmt::Display for ExceptionalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionalStatus::Resolved => write!(f, "RESOLVED"),
            ExceptionalStatus::Provisioned => write!(f, "PROVISIONED"),
        }
    }
}

// ==========================================
// 分摊基准 (Allocation Base)
// ==========================================
// 当前仅实现产量基准;其余基准是配置上预留的扩展方向,
// 分摊公式保留两步式 (总额×份额/自身产量) 以兼容非产量基准
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationBase {
    ProductionVolume, // 产量基准 (已实现)
    LaborHours,       // 工时基准 (预留)
    MachineHours,     // 机时基准 (预留)
}

impl Default for AllocationBase {
    fn default() -> Self {
        AllocationBase::ProductionVolume
    }
}

impl fmt::Display for AllocationBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationBase::ProductionVolume => write!(f, "PRODUCTION_VOLUME"),
            AllocationBase::LaborHours => write!(f, "LABOR_HOURS"),
            AllocationBase::MachineHours => write!(f, "MACHINE_HOURS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_band_thresholds() {
        assert_eq!(MarginBand::from_percent(20.0), MarginBand::Good);
        assert_eq!(MarginBand::from_percent(15.0), MarginBand::Good);
        assert_eq!(MarginBand::from_percent(14.9), MarginBand::Acceptable);
        assert_eq!(MarginBand::from_percent(5.0), MarginBand::Acceptable);
        assert_eq!(MarginBand::from_percent(4.9), MarginBand::Critical);
        assert_eq!(MarginBand::from_percent(-30.0), MarginBand::Critical);
    }

    #[test]
    fn test_margin_band_nan_is_critical() {
        // 不可计算的毛利率 (售价为0时产生) 归入警戒档
        assert_eq!(MarginBand::from_percent(f64::NAN), MarginBand::Critical);
    }

    #[test]
    fn test_margin_band_ordering() {
        assert!(MarginBand::Critical < MarginBand::Acceptable);
        assert!(MarginBand::Acceptable < MarginBand::Good);
    }

    #[test]
    fn test_allocation_base_default() {
        assert_eq!(AllocationBase::default(), AllocationBase::ProductionVolume);
    }

    #[test]
    fn test_enum_serde_wire_format() {
        let json = serde_json::to_string(&CostCategory::SemiVariable).unwrap();
        assert_eq!(json, "\"SEMI_VARIABLE\"");

        let status: ExceptionalStatus = serde_json::from_str("\"PROVISIONED\"").unwrap();
        assert_eq!(status, ExceptionalStatus::Provisioned);
    }
}
