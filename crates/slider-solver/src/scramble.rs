//! Random board generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;

/// Walk the blank `moves` random steps away from the goal.
///
/// The walk never immediately undoes its previous step, but it may still
/// revisit earlier boards, so the optimal solution can be shorter than
/// `moves`. The result is always solvable.
pub fn scramble<R: Rng + ?Sized>(dim: usize, moves: usize, rng: &mut R) -> Board {
    let mut current = Board::goal(dim);
    let mut previous: Option<Board> = None;

    for _ in 0..moves {
        let candidates: Vec<Board> = current
            .neighbors()
            .into_iter()
            .filter(|next| previous.as_ref() != Some(next))
            .collect();
        let Some(next) = candidates.choose(rng).cloned() else {
            break;
        };
        previous = Some(std::mem::replace(&mut current, next));
    }
    current
}

/// Uniformly shuffled labels `0..dim*dim`. About half of these boards are
/// unsolvable.
pub fn random_permutation<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Board {
    let mut labels: Vec<u32> = (0..(dim * dim) as u32).collect();
    labels.shuffle(rng);
    Board::new(labels.chunks(dim).map(|row| row.to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scramble_is_solvable_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        for dim in 2..=5 {
            let b = scramble(dim, 50, &mut rng);
            assert_eq!(b.dimension(), dim);
            assert!(b.is_permutation());
            assert!(b.is_solvable_by_parity(), "{b}");
        }
    }

    #[test]
    fn test_scramble_zero_moves_is_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(scramble(3, 0, &mut rng).is_goal());
    }

    #[test]
    fn test_scramble_is_reproducible() {
        let a = scramble(4, 30, &mut StdRng::seed_from_u64(99));
        let b = scramble(4, 30, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_permutation_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = random_permutation(4, &mut rng);
        assert_eq!(b.dimension(), 4);
        assert!(b.is_permutation());
    }
}
