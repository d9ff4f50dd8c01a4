use crate::{Item, Selection};
use anyhow::{anyhow, Result};
use std::sync::Arc;

/// A filtered catalog paired with the gold budget it must be solved under.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub items: Vec<Arc<Item>>,
    pub budget: u32,
}

impl Challenge {
    pub fn new(items: Vec<Arc<Item>>, budget: u32) -> Self {
        Self { items, budget }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Checks that `selection` only uses this challenge's items, picks each
    /// at most once and stays within budget. Returns its total defense.
    pub fn evaluate_selection(&self, selection: &Selection) -> Result<f64> {
        let mut used = vec![false; self.items.len()];
        for item in &selection.items {
            let idx = self
                .items
                .iter()
                .position(|candidate| Arc::ptr_eq(candidate, item))
                .ok_or_else(|| anyhow!("Item ({}) is not part of the challenge", item.description()))?;
            if used[idx] {
                return Err(anyhow!("Duplicate item selected: {}", item.description()));
            }
            used[idx] = true;
        }

        let (total_cost, total_defense) = selection.totals();
        if total_cost > self.budget as u64 {
            return Err(anyhow!(
                "Total cost ({}) exceeded budget ({})",
                total_cost,
                self.budget
            ));
        }
        Ok(total_defense)
    }
}
