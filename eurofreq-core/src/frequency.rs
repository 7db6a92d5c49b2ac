use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::models::Pool;

/// Nombre de tirages historiques auxquels les pourcentages se rapportent.
pub const HISTORICAL_DRAWS: u32 = 200;

/// Pourcentage d'apparition simulé de chaque boule (résultats 2025).
pub const MAIN_PERCENTAGES: [(u8, f64); 50] = [
    (17, 15.50), (20, 15.50), (23, 14.00), (48, 14.00), (44, 13.50), (15, 13.00), (39, 12.00),
    (27, 12.00), (31, 12.00), (50, 12.00), (21, 11.50), (10, 11.50), (29, 11.00), (30, 11.00),
    (43, 11.00), (3, 10.50), (11, 10.50), (12, 10.50), (49, 10.50), (28, 10.50), (7, 10.00),
    (41, 10.00), (4, 10.00), (25, 10.00), (14, 10.00), (36, 10.00), (38, 10.00), (9, 9.50),
    (22, 9.50), (6, 9.50), (26, 9.00), (19, 9.00), (45, 9.00), (8, 9.00), (24, 9.00), (5, 9.00),
    (1, 8.50), (2, 8.50), (37, 8.00), (46, 8.00), (42, 8.00), (34, 8.00), (13, 8.00), (16, 7.50),
    (35, 7.50), (47, 7.50), (33, 7.00), (40, 7.00), (18, 6.00), (32, 6.00),
];

/// Pourcentage d'apparition simulé de chaque étoile.
pub const STAR_PERCENTAGES: [(u8, f64); 12] = [
    (3, 20.00), (9, 20.00), (2, 19.50), (4, 18.50), (8, 18.00), (12, 17.00), (11, 16.50),
    (5, 16.50), (10, 14.00), (6, 13.50), (1, 13.50), (7, 13.00),
];

pub fn builtin_percentages(pool: Pool) -> &'static [(u8, f64)] {
    match pool {
        Pool::Balls => &MAIN_PERCENTAGES,
        Pool::Stars => &STAR_PERCENTAGES,
    }
}

/// Convertit un pourcentage en nombre de tirages estimé (arrondi bancaire).
pub fn estimated_draws(percentage: f64) -> u32 {
    (percentage * HISTORICAL_DRAWS as f64 / 100.0).round_ties_even() as u32
}

/// Nombre de tirages estimé par numéro, pour un seul domaine.
/// L'itération se fait toujours par numéro croissant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberFrequency {
    pool: Pool,
    counts: BTreeMap<u8, u32>,
    percentages: BTreeMap<u8, f64>,
}

impl NumberFrequency {
    fn build(pool: Pool, entries: &[(u8, f64)]) -> Self {
        let percentages: BTreeMap<u8, f64> = entries.iter().copied().collect();
        let counts = percentages
            .iter()
            .map(|(&n, &p)| (n, estimated_draws(p)))
            .collect();
        Self { pool, counts, percentages }
    }

    pub fn builtin(pool: Pool) -> Self {
        Self::build(pool, builtin_percentages(pool))
    }

    /// Construit une table à partir de pourcentages arbitraires.
    pub fn from_percentages(pool: Pool, entries: &[(u8, f64)]) -> Result<Self> {
        if entries.is_empty() {
            bail!("Table de fréquences vide ({})", pool.label());
        }
        let mut seen = vec![false; pool.size() + 1];
        for &(n, p) in entries {
            if !pool.contains(n) {
                bail!("{} : numéro {} hors limites (1-{})", pool.label(), n, pool.size());
            }
            if seen[n as usize] {
                bail!("{} : numéro {} en double", pool.label(), n);
            }
            seen[n as usize] = true;
            if !p.is_finite() || !(0.0..=100.0).contains(&p) {
                bail!("{} : pourcentage invalide pour {} ({}, attendu 0-100)", pool.label(), n, p);
            }
        }
        Ok(Self::build(pool, entries))
    }

    pub fn pool(&self) -> Pool {
        self.pool
    }

    pub fn get(&self, number: u8) -> Option<u32> {
        self.counts.get(&number).copied()
    }

    pub fn percentage(&self, number: u8) -> Option<f64> {
        self.percentages.get(&number).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&n, &c)| (n, c))
    }

    pub fn numbers(&self) -> Vec<u8> {
        self.counts.keys().copied().collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.counts.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

}

/// Tables figées des boules et des étoiles.
pub fn load_frequencies() -> (NumberFrequency, NumberFrequency) {
    (
        NumberFrequency::builtin(Pool::Balls),
        NumberFrequency::builtin(Pool::Stars),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_cover_domains() {
        let (main, stars) = load_frequencies();
        assert_eq!(main.numbers(), Pool::Balls.numbers());
        assert_eq!(stars.numbers(), Pool::Stars.numbers());
    }

    #[test]
    fn test_estimated_draws() {
        let (main, stars) = load_frequencies();
        assert_eq!(main.get(17), Some(31));
        assert_eq!(main.get(32), Some(12));
        assert_eq!(main.get(1), Some(17));
        assert_eq!(stars.get(3), Some(40));
        assert_eq!(stars.get(9), Some(40));
        assert_eq!(stars.get(7), Some(26));
        assert_eq!(main.get(51), None);
    }

    #[test]
    fn test_totals_match_historical_draws() {
        let (main, stars) = load_frequencies();
        let total = |freq: &NumberFrequency| freq.values().iter().sum::<u32>();
        assert_eq!(total(&main), HISTORICAL_DRAWS * 5);
        assert_eq!(total(&stars), HISTORICAL_DRAWS * 2);
    }

    #[test]
    fn test_load_frequencies_is_idempotent() {
        assert_eq!(load_frequencies(), load_frequencies());
    }

    #[test]
    fn test_iter_ascending() {
        let (_, stars) = load_frequencies();
        let numbers: Vec<u8> = stars.iter().map(|(n, _)| n).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn test_round_ties_even() {
        assert_eq!(estimated_draws(15.50), 31);
        assert_eq!(estimated_draws(0.25), 0);
        assert_eq!(estimated_draws(0.75), 2);
    }

    #[test]
    fn test_from_percentages_ok() {
        let freq = NumberFrequency::from_percentages(Pool::Stars, &[(1, 10.0), (2, 12.5)]).unwrap();
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.get(1), Some(20));
        assert_eq!(freq.get(2), Some(25));
        assert_eq!(freq.percentage(2), Some(12.5));
    }

    #[test]
    fn test_from_percentages_rejects_bad_tables() {
        assert!(NumberFrequency::from_percentages(Pool::Stars, &[]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Stars, &[(13, 1.0)]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Balls, &[(0, 1.0)]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Balls, &[(4, 1.0), (4, 2.0)]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Balls, &[(4, -1.0)]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Balls, &[(4, f64::NAN)]).is_err());
        assert!(NumberFrequency::from_percentages(Pool::Balls, &[(4, 100.5)]).is_err());
    }

    #[test]
    fn test_from_percentages_huge_values_rejected() {
        let result = NumberFrequency::from_percentages(Pool::Stars, &[(1, 1e12), (2, 3e12)]);
        assert!(result.is_err());
        let freq = NumberFrequency::from_percentages(Pool::Stars, &[(1, 0.0), (2, 100.0)]).unwrap();
        assert_eq!(freq.get(1), Some(0));
        assert_eq!(freq.get(2), Some(HISTORICAL_DRAWS));
    }
}
