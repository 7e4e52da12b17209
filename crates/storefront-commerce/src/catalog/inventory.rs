//! Stock levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock on hand for a variant (or for a product without variants).
///
/// Serialized as a plain count, or as the string `"unlimited"` for items
/// that are never tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "StockRepr", into = "StockRepr")]
pub enum Stock {
    /// A tracked, finite quantity.
    Limited(u32),
    /// Not tracked; always purchasable.
    #[default]
    Unlimited,
}

impl Stock {
    /// Keyword used for [`Stock::Unlimited`] in catalog files.
    pub const UNLIMITED: &'static str = "unlimited";

    /// Check if at least one unit can be sold.
    pub fn is_available(&self) -> bool {
        match self {
            Stock::Limited(quantity) => *quantity > 0,
            Stock::Unlimited => true,
        }
    }

}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stock::Limited(quantity) => write!(f, "{}", quantity),
            Stock::Unlimited => write!(f, "{}", Self::UNLIMITED),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StockRepr {
    Count(u32),
    Keyword(String),
}

impl TryFrom<StockRepr> for Stock {
    type Error = String;

    fn try_from(repr: StockRepr) -> Result<Self, Self::Error> {
        match repr {
            StockRepr::Count(quantity) => Ok(Stock::Limited(quantity)),
            StockRepr::Keyword(word) if word.eq_ignore_ascii_case(Stock::UNLIMITED) => {
                Ok(Stock::Unlimited)
            }
            StockRepr::Keyword(word) => Err(format!(
                "invalid stock {:?}: expected a non-negative count or \"unlimited\"",
                word
            )),
        }
    }
}

impl From<Stock> for StockRepr {
    fn from(stock: Stock) -> Self {
        match stock {
            Stock::Limited(quantity) => StockRepr::Count(quantity),
            Stock::Unlimited => StockRepr::Keyword(Stock::UNLIMITED.to_string()),
        }
    }
}
