use crate::{Catalog, Item};
use anyhow::Result;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::sync::Arc;

pub const MAX_GENERATED_COST: u32 = 50;
pub const MAX_GENERATED_DEFENSE: f64 = 100.0;

/// Deterministically generates a catalog of `num_items` items from `seed`.
///
/// Costs are drawn from `[1, 50]` and defense from `[0, 100)` rounded to one
/// decimal place.
pub fn generate_catalog(seed: &[u8; 32], num_items: usize) -> Result<Catalog> {
    let mut rng = SmallRng::from_seed(seed.clone());
    (0..num_items)
        .map(|i| {
            let cost = rng.gen_range(1..=MAX_GENERATED_COST);
            let defense = (rng.gen_range(0.0..MAX_GENERATED_DEFENSE) * 10.0).round() / 10.0;
            Ok(Arc::new(Item::new(format!("armor #{}", i), cost, defense)?))
        })
        .collect()
}
