//! Domain models for portfolio holdings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A holding in the user's portfolio. `allocation` and `return_rate` are
/// percentages; `value` is the current monetary worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: Uuid,
    pub name: String,
    pub allocation: f64,
    pub value: f64,
    pub return_rate: f64,
}

impl Investment {
    /// Builds a new holding with a freshly generated identifier.
    pub fn create(input: NewInvestment) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            allocation: input.allocation,
            value: input.value,
            return_rate: input.return_rate,
        }
    }

    /// Merges `patch` over this holding; the identifier is never touched.
    pub fn apply(&mut self, patch: InvestmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(allocation) = patch.allocation {
            self.allocation = allocation;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(return_rate) = patch.return_rate {
            self.return_rate = return_rate;
        }
    }
}

impl Identifiable for Investment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Investment {
    fn amount(&self) -> f64 {
        self.value
    }
}

/// Input shape for creating a holding; the identifier is assigned later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvestment {
    pub name: String,
    pub allocation: f64,
    pub value: f64,
    pub return_rate: f64,
}

/// Field-by-field update for a holding. Every field is optional; the
/// identifier cannot be altered through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestmentPatch {
    pub name: Option<String>,
    pub allocation: Option<f64>,
    pub value: Option<f64>,
    pub return_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_reports_current_value() {
        let holding = Investment::create(NewInvestment {
            name: "Index Fund".into(),
            allocation: 40.0,
            value: 15000.0,
            return_rate: 15.2,
        });
        assert_eq!(Amounted::amount(&holding), 15000.0);
    }
}
