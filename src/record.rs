// 🧾 Expense record - one dated, categorized amount with a free-form note

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A single expense entry.
///
/// Field order is the on-disk row order: date, category, amount,
/// description. The date is kept verbatim as entered; it is only
/// parse-validated when a month scan reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl Expense {
    /// Create an expense from an already-numeric amount.
    pub fn new(date: String, category: String, amount: f64, description: String) -> Self {
        Expense {
            date,
            category,
            amount,
            description,
        }
    }

    /// Create an expense from raw field text, coercing the amount.
    ///
    /// # Returns
    /// * `Ok(Expense)` - amount parsed as a number
    /// * `Err(StoreError::InvalidAmount)` - amount text is not numeric;
    ///   nothing is constructed and nothing reaches the store
    pub fn from_input(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, StoreError> {
        let parsed = amount.trim().parse::<f64>().map_err(|_| {
            StoreError::InvalidAmount {
                input: amount.to_string(),
            }
        })?;

        Ok(Expense::new(
            date.to_string(),
            category.to_string(),
            parsed,
            description.to_string(),
        ))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Date: {}, Category: {}, Amount: {}, Description: {}",
            self.date, self.category, self.amount, self.description,
        )
    }
}
