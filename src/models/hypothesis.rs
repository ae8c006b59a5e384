//! Planning assumptions: costing method, market rates, yields and financial targets

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// Product costing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostingMethod {
    /// Only variable production costs are assigned to products
    Variable,
    /// Fixed manufacturing overhead is absorbed into product cost
    Absorption,
}

/// Main market rate of an input or output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputOutputRate {
    pub id: u32,
    pub name: String,
    pub unit: String,
    pub value: f64,
}

/// Technical weight-yield assumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub id: u32,
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainAssumption {
    pub id: u32,
    pub name: String,
    pub unit: String,
    pub value: f64,
}

/// Target for a financing source/use ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatio {
    pub id: u32,
    pub name: String,
    pub current_value: f64,
    pub target_value: f64,
    /// First year in which the ratio starts moving toward the target
    pub begin_improvement_at: i32,
    /// Year by which the target is reached
    pub mature_year: i32,
    /// Name of the path taken between current and target value
    pub method: String,
}

impl FinancialRatio {
    pub fn validate(&self) -> Result<()> {
        if self.mature_year < self.begin_improvement_at {
            return Err(ValuationError::validation(format!(
                "financial ratio {}: mature year {} precedes improvement start {}",
                self.name, self.mature_year, self.begin_improvement_at
            )));
        }
        Ok(())
    }
}
