//! Planning horizon and inventory policy codes

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// A contiguous range of planning years
///
/// `length` is always at least 1; both construction and deserialization
/// go through [`YearRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    length: u32,
}

/// Financial years use the same shape as planning years
pub type FinancialYear = YearRange;

#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    length: u32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = ValuationError;

    fn try_from(raw: RawYearRange) -> Result<Self> {
        YearRange::new(raw.start, raw.length)
    }
}

impl YearRange {
    pub fn new(start: i32, length: u32) -> Result<Self> {
        if length == 0 {
            return Err(ValuationError::validation(
                "year range length must be a positive integer",
            ));
        }
        if length > i32::MAX as u32 || start as i64 + length as i64 - 1 > i32::MAX as i64 {
            return Err(ValuationError::validation(format!(
                "year range starting at {} with length {} overflows",
                start, length
            )));
        }
        Ok(Self { start, length })
    }

    /// Range of `length` years beginning with the current calendar year
    pub fn starting_this_year(length: u32) -> Result<Self> {
        Self::new(chrono::Local::now().year(), length)
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Last year in the range (inclusive)
    pub fn end(&self) -> i32 {
        self.start + (self.length as i32 - 1)
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end()
    }

    /// Years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> {
        let start = self.start;
        (0..self.length).map(move |i| start + i as i32)
    }
}

/// How shortfalls and surpluses of a material are handled
///
/// Serialized as the numeric approach code (1-6) used by planning sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InventoryManagementApproach {
    /// 1: buy the shortfall, sell the surplus
    BuyShortfallSellSurplus = 1,
    /// 2: buy the shortfall, no sales
    BuyShortfallNoSale = 2,
    /// 3: no purchases, sell the surplus
    NoPurchaseSellSurplus = 3,
    /// 4: no purchases, no sales
    NoPurchaseNoSale = 4,
    /// 5: buy the shortfall for consumption, sell surplus from production
    BuyForConsumptionSellProductionSurplus = 5,
    /// 6: sales constrained by consumption
    SalesConsumptionConstrained = 6,
}

impl InventoryManagementApproach {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether a shortfall is covered by purchasing
    pub fn buys_shortfall(&self) -> bool {
        matches!(
            self,
            Self::BuyShortfallSellSurplus
                | Self::BuyShortfallNoSale
                | Self::BuyForConsumptionSellProductionSurplus
        )
    }

    /// Whether surplus stock may be sold
    pub fn sells_surplus(&self) -> bool {
        matches!(
            self,
            Self::BuyShortfallSellSurplus
                | Self::NoPurchaseSellSurplus
                | Self::BuyForConsumptionSellProductionSurplus
        )
    }
}

impl TryFrom<u8> for InventoryManagementApproach {
    type Error = ValuationError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::BuyShortfallSellSurplus),
            2 => Ok(Self::BuyShortfallNoSale),
            3 => Ok(Self::NoPurchaseSellSurplus),
            4 => Ok(Self::NoPurchaseNoSale),
            5 => Ok(Self::BuyForConsumptionSellProductionSurplus),
            6 => Ok(Self::SalesConsumptionConstrained),
            other => Err(ValuationError::validation(format!(
                "unknown inventory management approach: {}",
                other
            ))),
        }
    }
}

impl From<InventoryManagementApproach> for u8 {
    fn from(approach: InventoryManagementApproach) -> u8 {
        approach.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_years() {
        let range = YearRange::new(2024, 3).unwrap();
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2024, 2025, 2026]);
        assert_eq!(range.end(), 2026);
        assert!(range.contains(2025));
        assert!(!range.contains(2027));
    }

    #[test]
    fn test_single_year_range() {
        let range = YearRange::new(1403, 1).unwrap();
        assert_eq!(range.end(), 1403);
        assert_eq!(range.years().count(), 1);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            YearRange::new(2024, 0),
            Err(ValuationError::Validation(_))
        ));
    }

    #[test]
    fn test_overflowing_range_rejected() {
        assert!(YearRange::new(i32::MIN, u32::MAX).is_err());
        assert!(YearRange::new(-10, (1u32 << 31) + 5).is_err());
        assert!(YearRange::new(i32::MAX, 2).is_err());

        let widest = YearRange::new(i32::MIN, i32::MAX as u32).unwrap();
        assert_eq!(widest.end(), -2);
        assert!(widest.contains(i32::MIN));
        assert!(!widest.contains(-1));
        assert_eq!(widest.years().next(), Some(i32::MIN));

        let last_year = YearRange::new(i32::MAX, 1).unwrap();
        assert_eq!(last_year.years().collect::<Vec<_>>(), vec![i32::MAX]);
    }

    #[test]
    fn test_year_range_deserialize_validates() {
        let ok: YearRange = serde_json::from_str(r#"{"start": 2024, "length": 5}"#).unwrap();
        assert_eq!(ok.length(), 5);

        let bad = serde_json::from_str::<YearRange>(r#"{"start": 2024, "length": 0}"#);
        assert!(bad.is_err());

        let negative = serde_json::from_str::<YearRange>(r#"{"start": 2024, "length": -2}"#);
        assert!(negative.is_err());
    }

    #[test]
    fn test_starting_this_year() {
        let range = YearRange::starting_this_year(2).unwrap();
        assert_eq!(range.start(), chrono::Local::now().year());
    }

    #[test]
    fn test_approach_codes() {
        for code in 1..=6u8 {
            let approach = InventoryManagementApproach::try_from(code).unwrap();
            assert_eq!(approach.code(), code);
        }
        assert!(InventoryManagementApproach::try_from(0).is_err());
        assert!(InventoryManagementApproach::try_from(7).is_err());
    }

    #[test]
    fn test_approach_serde_as_code() {
        let approach: InventoryManagementApproach = serde_json::from_str("3").unwrap();
        assert_eq!(approach, InventoryManagementApproach::NoPurchaseSellSurplus);
        assert!(!approach.buys_shortfall());
        assert!(approach.sells_surplus());

        assert_eq!(
            serde_json::to_string(&InventoryManagementApproach::NoPurchaseNoSale).unwrap(),
            "4"
        );
        assert!(serde_json::from_str::<InventoryManagementApproach>("9").is_err());
    }
}
