//! ABC (Pareto) classification by annual usage value.
//!
//! Classes depend on each product's share of the collection's total usage value,
//! so classification is a batch operation over the whole collection and is
//! recomputed on every call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stocklens_core::{Entity, ProductId};

use crate::product::{DAYS_PER_YEAR, Product};

/// Products whose cumulative share stays at or below this are class A.
pub const CLASS_A_CUMULATIVE_SHARE: f64 = 0.80;
/// Products whose cumulative share stays at or below this (and above A) are class B.
pub const CLASS_B_CUMULATIVE_SHARE: f64 = 0.95;

/// Value tier: A = top ~80% of usage value, B = next ~15%, C = the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        f.write_str(s)
    }
}

/// Annual usage value: `demand_rate * 365 * unit_cost`.
pub fn annual_usage_value(product: &Product) -> f64 {
    product.demand_rate * DAYS_PER_YEAR * product.unit_cost
}

/// One ranked row of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcEntry {
    pub product_id: ProductId,
    pub usage_value: f64,
    /// Running share of total value up to and including this row (0 when the total is 0).
    pub cumulative_share: f64,
    pub class: AbcClass,
}

/// Result of [`classify_abc`]: one entry per input product, ranked by usage value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbcClassification {
    entries: Vec<AbcEntry>,
    index: HashMap<ProductId, usize>,
    total_value: f64,
}

impl AbcClassification {
    pub fn get(&self, id: &ProductId) -> Option<AbcClass> {
        self.index.get(id).map(|&i| self.entries[i].class)
    }

    /// Entries in rank order (highest usage value first).
    pub fn entries(&self) -> &[AbcEntry] {
        &self.entries
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, class: AbcClass) -> usize {
        self.entries.iter().filter(|e| e.class == class).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, AbcClass)> {
        self.entries.iter().map(|e| (&e.product_id, e.class))
    }
}

/// Partition `products` into A/B/C tiers.
///
/// - Ranking sorts by usage value, descending. The sort is stable, so equal values
///   keep their original collection order.
/// - Walking the ranking, a product is A while the running share is within
///   [`CLASS_A_CUMULATIVE_SHARE`], B while within [`CLASS_B_CUMULATIVE_SHARE`], else C.
///   The top-ranked product is always A, so tier A is never empty.
/// - A collection whose total usage value is zero classifies every product as C.
/// - Ids are expected to be unique; with duplicates, `get` resolves to the
///   lowest-ranked entry while `entries` still lists every input.
pub fn classify_abc(products: &[Product]) -> AbcClassification {
    let mut ranked: Vec<(ProductId, f64)> = products
        .iter()
        .map(|p| (p.id().clone(), annual_usage_value(p)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total_value: f64 = ranked.iter().map(|(_, v)| v).sum();

    let mut entries = Vec::with_capacity(ranked.len());
    if total_value == 0.0 {
        for (product_id, usage_value) in ranked {
            entries.push(AbcEntry {
                product_id,
                usage_value,
                cumulative_share: 0.0,
                class: AbcClass::C,
            });
        }
    } else {
        let mut accumulated = 0.0;
        for (rank, (product_id, usage_value)) in ranked.into_iter().enumerate() {
            accumulated += usage_value;
            let share = accumulated / total_value;
            // The top-ranked product anchors tier A even when it alone exceeds the cutoff.
            let class = if rank == 0 {
                AbcClass::A
            } else {
                class_for_share(share)
            };
            entries.push(AbcEntry {
                product_id,
                usage_value,
                cumulative_share: share,
                class,
            });
        }
    }

    let index = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.product_id.clone(), i))
        .collect();

    debug!(products = products.len(), total_value, "abc classification computed");

    AbcClassification {
        entries,
        index,
        total_value,
    }
}

fn class_for_share(share: f64) -> AbcClass {
    if share <= CLASS_A_CUMULATIVE_SHARE {
        AbcClass::A
    } else if share <= CLASS_B_CUMULATIVE_SHARE {
        AbcClass::B
    } else {
        AbcClass::C
    }
}
