//! Weighted categorical sampling shared by every type table

use rand::Rng;

/// Draw one value from `(value, weight)` pairs by cumulative-sum walk.
///
/// Weights need not sum to 1. A draw that overruns the cumulative sum
/// (weights summing below 1, or float rounding) returns the first entry.
/// Returns `None` only for an empty table.
pub fn weighted_choice<'a, T, R>(rng: &mut R, table: &'a [(T, f32)]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let roll: f32 = rng.gen();
    let mut cumulative = 0.0_f32;

    for (value, weight) in table {
        cumulative += *weight;
        if cumulative >= roll {
            return Some(value);
        }
    }

    table.first().map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let table: [(u8, f32); 0] = [];
        assert!(weighted_choice(&mut rng, &table).is_none());
    }

    #[test]
    fn test_zero_roll_picks_first() {
        // StepRng(0, 0) always yields 0, so the first entry wins
        let mut rng = StepRng::new(0, 0);
        let table = [('a', 0.2), ('b', 0.8)];
        assert_eq!(weighted_choice(&mut rng, &table), Some(&'a'));
    }

    #[test]
    fn test_overrun_falls_back_to_first() {
        // Near-1.0 roll against weights summing to 0.3
        let mut rng = StepRng::new(u64::MAX, 0);
        let table = [('a', 0.1), ('b', 0.2)];
        assert_eq!(weighted_choice(&mut rng, &table), Some(&'a'));
    }

    #[test]
    fn test_distribution_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let table = [("common", 0.9), ("rare", 0.1)];

        let mut common = 0;
        for _ in 0..10_000 {
            if *weighted_choice(&mut rng, &table).unwrap() == "common" {
                common += 1;
            }
        }

        assert!(common > 8_500 && common < 9_500, "common drawn {} times", common);
    }

    #[test]
    fn test_zero_weight_never_drawn_past_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let table = [(1, 0.5), (2, 0.0), (3, 0.5)];
        for _ in 0..1_000 {
            let value = *weighted_choice(&mut rng, &table).unwrap();
            assert_ne!(value, 2);
        }
    }
}
