// ==========================================
// 企业成本核算引擎 - 成本台账快照
// ==========================================
// 职责: 持有某一时点的全部成本记录、产品目录与核算配置
// 红线: 快照只读;增删改由外部持久化层负责,核心从不修改记录
// ==========================================
// 并发模型: 每次核算读取一份一致快照,计算过程无任何副作用,
// 并发读取互不干扰,无需加锁
// ==========================================

use crate::config::CostingConfig;
use crate::domain::cost_record::{
    CapitalExpenditure, DirectCost, ExceptionalCost, FinancialCost, PeriodicCost, PersonnelCost,
    RiskCost, SemiVariableCost, VariableCost,
};
use crate::domain::product::Product;
use crate::repository::error::RepositoryResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================
// CostSnapshot - 成本台账时点快照
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostSnapshot {
    // ===== 九大成本类目 =====
    #[serde(default)]
    pub fixed_costs: Vec<PeriodicCost>,
    #[serde(default)]
    pub variable_costs: Vec<VariableCost>,
    #[serde(default)]
    pub semi_variable_costs: Vec<SemiVariableCost>,
    #[serde(default)]
    pub direct_costs: Vec<DirectCost>,
    #[serde(default)]
    pub indirect_costs: Vec<PeriodicCost>,
    #[serde(default)]
    pub operating_expenses: Vec<PeriodicCost>,
    #[serde(default)]
    pub capital_expenditures: Vec<CapitalExpenditure>,
    #[serde(default)]
    pub personnel_costs: Vec<PersonnelCost>,
    #[serde(default)]
    pub financial_costs: Vec<FinancialCost>,
    #[serde(default)]
    pub risk_costs: Vec<RiskCost>,

    // ===== 例外成本 (独立口径,不参与分摊) =====
    #[serde(default)]
    pub exceptional_costs: Vec<ExceptionalCost>,

    // ===== 产品目录与配置 =====
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub config: CostingConfig,

    /// 快照采集时间 (可选,仅用于日志与审计展示)
    #[serde(default)]
    pub captured_at: Option<NaiveDateTime>,
}

impl CostSnapshot {
    // ==========================================
    // 只读访问
    // ==========================================

    /// 按ID查找产品
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// 全部产品的月总产量 (分摊基准)
    pub fn total_units_per_month(&self) -> f64 {
        self.products.iter().map(|p| p.units_per_month).sum()
    }

    /// 产品数量
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ==========================================
    // JSON 序列化
    // ==========================================

    /// 从JSON字符串解析快照
    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为JSON字符串 (带缩进,便于人工核对)
    pub fn to_json_string(&self) -> RepositoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从文件加载快照
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;

        tracing::info!(
            "快照加载完成: {} (产品{}个, 月总产量{})",
            path.display(),
            snapshot.product_count(),
            snapshot.total_units_per_month()
        );

        Ok(snapshot)
    }

    /// 保存快照到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> RepositoryResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;

        tracing::info!("快照已保存: {}", path.display());
        Ok(())
    }
}
