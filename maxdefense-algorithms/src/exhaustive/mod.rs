use anyhow::{anyhow, Result};
use log::debug;
use maxdefense_catalog::{sum_items, Challenge, Item, Selection};
use std::sync::Arc;

/// Largest item count the exhaustive search accepts. Every subset must fit
/// in a `u64` mask, and `1 << n` must not overflow.
pub const MAX_ITEMS: usize = 63;

/// A subset of `0..n`: element `j` is a member iff bit `j` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetMask(pub u64);

impl SubsetMask {
    pub fn contains(self, j: usize) -> bool {
        (self.0 >> j) & 1 == 1
    }

    pub fn members(self, num_items: usize) -> impl Iterator<Item = usize> {
        (0..num_items).filter(move |&j| self.contains(j))
    }
}

/// Iterates all `2^n` subsets of `n` elements, starting with the empty one.
#[derive(Debug, Clone)]
pub struct Subsets {
    next: u64,
    end: u64,
}

impl Subsets {
    pub fn new(num_items: usize) -> Self {
        assert!(
            num_items <= MAX_ITEMS,
            "Cannot enumerate subsets of {} items (max {})",
            num_items,
            MAX_ITEMS
        );
        Self {
            next: 0,
            end: 1u64 << num_items,
        }
    }
}

impl Iterator for Subsets {
    type Item = SubsetMask;

    fn next(&mut self) -> Option<SubsetMask> {
        if self.next == self.end {
            return None;
        }
        let mask = SubsetMask(self.next);
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets {}

/// Tries every subset of `items` and keeps the first one with the highest
/// defense whose cost fits in `budget`.
///
/// # Panics
///
/// Panics if `items` holds more than [`MAX_ITEMS`] items.
pub fn exhaustive_max_defense(items: &[Arc<Item>], budget: f64) -> Selection {
    let num_items = items.len();
    assert!(
        num_items <= MAX_ITEMS,
        "Exhaustive search needs fewer than 64 items, got {}",
        num_items
    );

    let mut best = Selection::new();
    let mut best_defense = 0.0;
    let mut num_feasible = 0u64;
    let mut candidate = Vec::with_capacity(num_items);
    for mask in Subsets::new(num_items) {
        candidate.clear();
        candidate.extend(mask.members(num_items).map(|j| items[j].clone()));
        let (cost, defense) = sum_items(&candidate);
        if cost as f64 > budget {
            continue;
        }
        num_feasible += 1;
        if defense > best_defense {
            best = Selection::from(candidate.clone());
            best_defense = defense;
        }
    }
    debug!(
        "exhaustive: {} items, budget {}, {} feasible subsets, best defense {}",
        num_items, budget, num_feasible, best_defense
    );
    best
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Selection> {
    if challenge.num_items() > MAX_ITEMS {
        return Err(anyhow!(
            "Exhaustive search supports at most {} items, got {}",
            MAX_ITEMS,
            challenge.num_items()
        ));
    }
    Ok(exhaustive_max_defense(
        &challenge.items,
        challenge.budget as f64,
    ))
}
