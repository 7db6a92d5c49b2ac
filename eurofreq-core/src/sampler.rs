use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tirage uniforme sans remise dans une liste ordonnée.
pub trait Sampler {
    fn sample_distinct(&mut self, items: &[u8], amount: usize) -> Result<Vec<u8>>;
}

impl<R: Rng + ?Sized> Sampler for R {
    fn sample_distinct(&mut self, items: &[u8], amount: usize) -> Result<Vec<u8>> {
        if amount > items.len() {
            bail!(
                "Impossible de tirer {} numéros parmi {} disponibles",
                amount,
                items.len()
            );
        }
        let picked = rand::seq::index::sample(self, items.len(), amount)
            .into_iter()
            .map(|i| items[i])
            .collect();
        Ok(picked)
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_distinct_from_domain() {
        let items: Vec<u8> = (1..=50).collect();
        let mut rng = make_rng(Some(7));
        for _ in 0..200 {
            let mut picked = rng.sample_distinct(&items, 5).unwrap();
            assert_eq!(picked.len(), 5);
            assert!(picked.iter().all(|n| items.contains(n)));
            picked.sort();
            picked.dedup();
            assert_eq!(picked.len(), 5);
        }
    }

    #[test]
    fn test_sample_all_items_is_permutation() {
        let items = [4, 8, 15, 16, 23];
        let mut rng = make_rng(Some(42));
        let mut picked = rng.sample_distinct(&items, 5).unwrap();
        picked.sort();
        assert_eq!(picked, items);
    }

    #[test]
    fn test_sample_too_many_fails() {
        let mut rng = make_rng(Some(1));
        assert!(rng.sample_distinct(&[1, 2], 3).is_err());
        assert!(rng.sample_distinct(&[], 1).is_err());
        assert_eq!(rng.sample_distinct(&[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let items: Vec<u8> = (1..=12).collect();
        let a = make_rng(Some(2025)).sample_distinct(&items, 2).unwrap();
        let b = make_rng(Some(2025)).sample_distinct(&items, 2).unwrap();
        assert_eq!(a, b);
    }
}
