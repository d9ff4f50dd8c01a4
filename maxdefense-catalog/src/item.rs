use crate::ItemError;
use serde::Serialize;
use std::{fmt, sync::Arc};

/// One piece of armor available for purchase.
///
/// Items are immutable once built and are shared through [`Arc`] between a
/// catalog, its filtered views and every selection drawn from them.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Item {
    description: String,
    cost: u32,
    defense: f64,
}

/// An ordered sequence of shared items, in source order.
pub type Catalog = Vec<Arc<Item>>;

impl Item {
    pub fn new(description: impl Into<String>, cost: u32, defense: f64) -> Result<Self, ItemError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ItemError::EmptyDescription);
        }
        if cost == 0 {
            return Err(ItemError::ZeroCost);
        }
        if !defense.is_finite() || defense < 0.0 {
            return Err(ItemError::InvalidDefense(defense));
        }
        Ok(Self {
            description,
            cost,
            defense,
        })
    }

    pub fn shared(description: impl Into<String>, cost: u32, defense: f64) -> Result<Arc<Self>, ItemError> {
        Self::new(description, cost, defense).map(Arc::new)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ye olde {} ==> Cost of {} gold; Defense points = {}",
            self.description, self.cost, self.defense
        )
    }
}
