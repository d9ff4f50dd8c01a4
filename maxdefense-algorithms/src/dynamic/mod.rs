//! Bottom-up 0/1 knapsack over integer gold budgets.
//!
//! `table[i][b]` holds the best defense reachable with the first `i` items
//! and a budget of exactly `b` gold. Row 0 and column 0 are zero. When taking
//! an item ties with leaving it, the item is left out, so backtracking only
//! picks an item where the two adjacent rows differ.
//!
//! Time and memory are both `O(n * budget)`.

use anyhow::Result;
use log::debug;
use maxdefense_catalog::{Challenge, Item, Selection};
use ndarray::Array2;
use std::{fmt, sync::Arc};

/// Tables with more rows or columns than this are not printed.
pub const MAX_PRINTABLE_DIM: usize = 250;

#[derive(Debug, Clone)]
pub struct DefenseTable {
    cells: Array2<f64>,
}

impl DefenseTable {
    pub fn build(items: &[Arc<Item>], budget: u32) -> Self {
        let budget = budget as usize;
        let mut cells = Array2::<f64>::zeros((items.len() + 1, budget + 1));

        for (idx, item) in items.iter().enumerate() {
            let i = idx + 1;
            let cost = item.cost() as usize;
            let defense = item.defense();
            for b in 1..=budget {
                let leave = cells[[i - 1, b]];
                cells[[i, b]] = if b < cost {
                    leave
                } else {
                    let take = defense + cells[[i - 1, b - cost]];
                    if take > leave {
                        take
                    } else {
                        leave
                    }
                };
            }
        }

        Self { cells }
    }

    pub fn cells(&self) -> &Array2<f64> {
        &self.cells
    }

    pub fn num_items(&self) -> usize {
        self.cells.nrows() - 1
    }

    pub fn budget(&self) -> usize {
        self.cells.ncols() - 1
    }

    pub fn get(&self, num_items: usize, budget: usize) -> f64 {
        self.cells[[num_items, budget]]
    }

    /// Best defense over all items at the full budget.
    pub fn best(&self) -> f64 {
        self.cells[[self.num_items(), self.budget()]]
    }

    /// Recovers the items behind [`DefenseTable::best`], last item first.
    ///
    /// `items` must be the slice the table was built from. Stops early once
    /// the remaining cell is zero; defense is never negative so nothing
    /// further can be selected.
    pub fn backtrack(&self, items: &[Arc<Item>]) -> Selection {
        debug_assert_eq!(items.len(), self.num_items());
        let mut selected = Vec::new();
        let mut cursor = self.budget();
        let mut i = self.num_items();
        while i > 0 && self.cells[[i, cursor]] != 0.0 {
            if self.cells[[i, cursor]] != self.cells[[i - 1, cursor]] {
                let item = &items[i - 1];
                cursor -= item.cost() as usize;
                selected.push(item.clone());
            }
            i -= 1;
        }
        Selection::from(selected)
    }
}

impl fmt::Display for DefenseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** 2D Cache ***")?;
        if self.cells.nrows() > MAX_PRINTABLE_DIM || self.cells.ncols() > MAX_PRINTABLE_DIM {
            return writeln!(f, "[too large]");
        }
        for row in self.cells.rows() {
            for value in row {
                write!(f, "{:>5}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn dynamic_max_defense(items: &[Arc<Item>], budget: u32) -> Selection {
    let table = DefenseTable::build(items, budget);
    let selection = table.backtrack(items);
    debug!(
        "dynamic: {} items, budget {}, best defense {}, {} selected",
        items.len(),
        budget,
        table.best(),
        selection.len()
    );
    selection
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Selection> {
    Ok(dynamic_max_defense(&challenge.items, challenge.budget))
}
