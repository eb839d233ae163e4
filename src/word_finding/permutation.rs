//! Ordered permutations of every non-empty rack subset.

use crate::tile::Tile;

/// Generates every ordered permutation of every non-empty subset of `rack`,
/// sizes 1 through `rack.len()`.
///
/// This is the full search space of "what could I place": for a rack of n
/// tiles it yields Σ(k=1..n) n!/(n-k)! orderings, 13 699 for the standard
/// rack of 7. Factorial, but bounded by the fixed rack size, so the
/// exhaustive enumeration stays cheap in practice.
pub fn rack_permutations(rack: &[Tile]) -> Vec<Vec<Tile>> {
    let mut permutations = Vec::new();
    let mut current = Vec::with_capacity(rack.len());
    let mut used = vec![false; rack.len()];
    extend(rack, &mut used, &mut current, &mut permutations);
    permutations
}

fn extend(
    rack: &[Tile],
    used: &mut [bool],
    current: &mut Vec<Tile>,
    permutations: &mut Vec<Vec<Tile>>,
) {
    for index in 0..rack.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        current.push(rack[index].clone());
        // Every prefix is itself a permutation of a smaller subset.
        permutations.push(current.clone());
        extend(rack, used, current, permutations);
        current.pop();
        used[index] = false;
    }
}
