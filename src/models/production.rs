//! Production flow and cost input records

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// Planned production of one product in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionFlow {
    /// Product code
    pub id: u32,

    pub year: i32,

    /// Production capacity (units)
    pub capacity: u64,

    /// Planned production quantity (units)
    pub qty: u64,

    /// Share of total sales that is exported, as a fraction
    #[serde(default)]
    pub pct_export: f64,

    /// Share of production done on commission (toll manufacturing), as a fraction
    #[serde(default)]
    pub pct_commission_prod: f64,
}

impl ProductionFlow {
    pub fn new(id: u32, year: i32, capacity: u64, qty: u64) -> Self {
        Self {
            id,
            year,
            capacity,
            qty,
            pct_export: 0.0,
            pct_commission_prod: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.qty > self.capacity {
            return Err(ValuationError::validation(format!(
                "product {} in {}: quantity {} exceeds capacity {}",
                self.id, self.year, self.qty, self.capacity
            )));
        }
        for (name, pct) in [
            ("pct_export", self.pct_export),
            ("pct_commission_prod", self.pct_commission_prod),
        ] {
            if !(0.0..=1.0).contains(&pct) {
                return Err(ValuationError::validation(format!(
                    "product {} in {}: {} must be within [0, 1], got {}",
                    self.id, self.year, name, pct
                )));
            }
        }
        Ok(())
    }

    /// Capacity utilization (0 when there is no capacity)
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.qty as f64 / self.capacity as f64
    }
}

/// A production input (material, energy, labour) attached to a cost center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub id: u32,
    pub cost_center_id: u32,
    pub name: String,
    /// Unit of measure
    pub unit: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_optional_percentages_default_to_zero() {
        let flow: ProductionFlow = serde_json::from_str(
            r#"{"id": 7, "year": 2024, "capacity": 1000, "qty": 800}"#,
        )
        .unwrap();
        assert_eq!(flow.pct_export, 0.0);
        assert_eq!(flow.pct_commission_prod, 0.0);
        assert_relative_eq!(flow.utilization(), 0.8);
        assert!(flow.validate().is_ok());
    }

    #[test]
    fn test_qty_over_capacity_rejected() {
        let flow = ProductionFlow::new(1, 2024, 100, 150);
        assert!(matches!(flow.validate(), Err(ValuationError::Validation(_))));
    }

    #[test]
    fn test_percentage_range() {
        let mut flow = ProductionFlow::new(1, 2024, 100, 50);
        flow.pct_export = 1.2;
        assert!(flow.validate().is_err());

        flow.pct_export = 0.3;
        flow.pct_commission_prod = -0.1;
        assert!(flow.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_utilization() {
        assert_eq!(ProductionFlow::new(1, 2024, 0, 0).utilization(), 0.0);
    }
}
