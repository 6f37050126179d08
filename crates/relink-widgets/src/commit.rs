#![forbid(unsafe_code)]

//! The commit engine: apply a pairing batch as simultaneous position-
//! preserving swaps.

use ahash::AHashMap;

use crate::item::{Item, ItemId};
use crate::session::Pairing;

/// Apply every pairing as an index-for-index exchange between the two
/// rosters, returning the post-swap rosters.
///
/// Pure over its inputs: the argument slices are never mutated.
///
/// Pairings resolve by id against the *current* occupancy, in creation
/// order, so a pairing that references an id relocated by an earlier swap in
/// the same batch finds it at its post-swap location. A pairing whose
/// endpoints cannot both be resolved is skipped silently; with uniqueness
/// enforced at pairing creation this only arises from stale restored state.
///
/// Runs in O(items + pairings) via per-side id→index occupancy maps.
#[must_use]
pub fn apply_pairings(
    pairings: &[Pairing],
    left: &[Item],
    right: &[Item],
) -> (Vec<Item>, Vec<Item>) {
    let mut new_left = left.to_vec();
    let mut new_right = right.to_vec();

    let mut in_left: AHashMap<ItemId, usize> = new_left
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id, i))
        .collect();
    let mut in_right: AHashMap<ItemId, usize> = new_right
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id, i))
        .collect();

    for pairing in pairings {
        let (Some(&li), Some(&ri)) = (in_left.get(&pairing.left), in_right.get(&pairing.right))
        else {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "connector.commit.skip",
                left = pairing.left.0,
                right = pairing.right.0
            );
            continue;
        };

        std::mem::swap(&mut new_left[li], &mut new_right[ri]);

        // The occupancy maps must follow the items across sides so later
        // pairings in the batch resolve against post-swap locations.
        in_left.remove(&pairing.left);
        in_right.remove(&pairing.right);
        in_left.insert(pairing.right, li);
        in_right.insert(pairing.left, ri);
    }

    (new_left, new_right)
}
