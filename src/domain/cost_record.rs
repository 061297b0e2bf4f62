// ==========================================
// 企业成本核算引擎 - 成本记录领域模型
// ==========================================
// 职责: 定义各类目成本记录的形状与月度换算规则
// 红线: 记录不含聚合/分摊逻辑,只负责"单条记录折算为月度口径"
// ==========================================
// 记录ID由外部CRUD层分配,本核心从不生成ID
// ==========================================

use crate::domain::types::ExceptionalStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_period() -> String {
    "monthly".to_string()
}

// ==========================================
// PeriodicCost - 平周期成本记录
// ==========================================
// 固定成本、间接成本、OPEX 共用此形状: 金额已是月度口径
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodicCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String, // 展示用分类标签 (Facilities/IT/...)
    pub amount: f64, // 月度金额
    #[serde(default = "default_period")]
    pub period: String, // 目前仅支持 monthly
    #[serde(default)]
    pub description: Option<String>,
}

// ==========================================
// VariableCost - 变动成本记录
// ==========================================
// 单位费率,下游乘以总产量得到月度金额
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub unit_cost: f64, // 每件费率
    #[serde(default)]
    pub description: Option<String>,
}

// ==========================================
// SemiVariableCost - 半变动成本记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemiVariableCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub fixed_amount: f64,   // 固定部分 (月度)
    pub variable_rate: f64,  // 每件变动费率
    #[serde(default)]
    pub description: Option<String>,
}

impl SemiVariableCost {
    /// 指定产量下的月度总额
    pub fn monthly_total(&self, units: f64) -> f64 {
        self.fixed_amount + self.variable_rate * units
    }
}

// ==========================================
// DirectCost - 直接成本记录
// ==========================================
// 计价口径二选一,用显式判别式建模,
// 杜绝"按字段是否存在猜公式"导致的静默归零
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectCostBasis {
    /// 按件计价
    PerUnit { cost_per_unit: f64 },
    /// 按工时计价 (时薪 × 单件工时)
    Hourly { hourly_rate: f64, hours_per_unit: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub basis: DirectCostBasis,
    #[serde(default)]
    pub description: Option<String>,
}

impl DirectCost {
    /// 折算为单件成本
    pub fn cost_per_unit(&self) -> f64 {
        match self.basis {
            DirectCostBasis::PerUnit { cost_per_unit } => cost_per_unit,
            DirectCostBasis::Hourly {
                hourly_rate,
                hours_per_unit,
            } => hourly_rate * hours_per_unit,
        }
    }
}

// ==========================================
// CapitalExpenditure - 资本支出记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalExpenditure {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: f64,            // 购置总价
    pub useful_life_years: f64, // 使用年限
    #[serde(default)]
    pub year_acquired: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CapitalExpenditure {
    /// 直线法月度折旧
    pub fn monthly_depreciation(&self) -> f64 {
        self.amount / (self.useful_life_years * 12.0)
    }
}

// ==========================================
// PersonnelCost - 人员成本记录 (按部门)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonnelCost {
    pub id: String,
    pub department: String,
    pub headcount: i32,
    pub avg_salary: f64, // 人均月薪
    #[serde(default)]
    pub benefits: f64,   // 人均月度福利
    #[serde(default)]
    pub training: f64,   // 人均月度培训
    #[serde(default)]
    pub description: Option<String>,
}

impl PersonnelCost {
    /// 部门月度人员成本
    pub fn monthly_total(&self) -> f64 {
        self.headcount as f64 * (self.avg_salary + self.benefits + self.training)
    }
}

// ==========================================
// FinancialCost - 财务成本记录
// ==========================================
// 金额已是月度口径;本金与年利率仅作台账信息保留
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: f64, // 月度金额
    #[serde(default)]
    pub principal: Option<f64>,
    #[serde(default)]
    pub annual_rate_percent: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

// ==========================================
// RiskCost - 风险准备金记录
// ==========================================
// 计提口径二选一: 固定年计提额,或 基数×年计提率
// 两种口径均为年度金额,月度折算统一除以12
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskProvisionBasis {
    /// 固定年计提额
    FixedProvision { fixed_provision: f64 },
    /// 基数 × 年计提率(%)
    RateOnBase {
        base_amount: f64,
        provision_rate_percent: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub basis: RiskProvisionBasis,
    #[serde(default)]
    pub description: Option<String>,
}

impl RiskCost {
    /// 月度计提额
    pub fn monthly_provision(&self) -> f64 {
        let annual = match self.basis {
            RiskProvisionBasis::FixedProvision { fixed_provision } => fixed_provision,
            RiskProvisionBasis::RateOnBase {
                base_amount,
                provision_rate_percent,
            } => base_amount * provision_rate_percent / 100.0,
        };
        annual / 12.0
    }
}

// ==========================================
// ExceptionalCost - 例外成本记录
// ==========================================
// 非经常性支出,不进入产品成本分摊与月度成本基盘,
// 仅通过独立汇总口径对外呈现
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionalCost {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64, // 实际发生金额 (RESOLVED)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: ExceptionalStatus,
    #[serde(default)]
    pub provision: f64, // 计提金额 (PROVISIONED)
    #[serde(default)]
    pub description: Option<String>,
}

impl ExceptionalCost {
    /// 有效金额: 已发生取实际金额,计提中取准备金额
    pub fn effective_amount(&self) -> f64 {
        match self.status {
            ExceptionalStatus::Resolved => self.amount,
            ExceptionalStatus::Provisioned => self.provision,
        }
    }
}
