use crate::Item;
use std::{fmt, sync::Arc};

/// A subset of items chosen by a solver, in the order the solver found them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub items: Vec<Arc<Item>>,
}

impl Selection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_cost(&self) -> u64 {
        sum_items(&self.items).0
    }

    pub fn total_defense(&self) -> f64 {
        sum_items(&self.items).1
    }

    pub fn totals(&self) -> (u64, f64) {
        sum_items(&self.items)
    }
}

impl From<Vec<Arc<Item>>> for Selection {
    fn from(items: Vec<Arc<Item>>) -> Self {
        Self { items }
    }
}

/// Total cost and total defense of `items`.
pub fn sum_items(items: &[Arc<Item>]) -> (u64, f64) {
    items.iter().fold((0u64, 0.0f64), |(cost, defense), item| {
        (cost + item.cost() as u64, defense + item.defense())
    })
}

/// Keeps the first `limit` items of `source` whose defense lies in
/// `[min_defense, max_defense]`, preserving source order.
///
/// Used both to drop items irrelevant to the optimisation and to cap the
/// input size of the exhaustive search.
pub fn filter_items(
    source: &[Arc<Item>],
    min_defense: f64,
    max_defense: f64,
    limit: usize,
) -> Vec<Arc<Item>> {
    source
        .iter()
        .filter(|item| item.defense() >= min_defense && item.defense() <= max_defense)
        .take(limit)
        .cloned()
        .collect()
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** Armor Vector ***")?;
        if self.is_empty() {
            return writeln!(f, "[empty armor list]");
        }
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        let (total_cost, total_defense) = self.totals();
        writeln!(f, "> Grand total cost: {} gold", total_cost)?;
        writeln!(f, "> Grand total defense: {}", total_defense)
    }
}
