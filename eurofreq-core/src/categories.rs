use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::frequency::NumberFrequency;
use crate::models::{FrequencyTier, Pool};

/// Seuils de tercile : `high` est la dernière valeur du tercile haut,
/// `low` la première valeur du tercile bas (valeurs triées décroissantes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TercileThresholds {
    pub high: u32,
    pub low: u32,
}

impl TercileThresholds {
    pub fn classify(&self, count: u32) -> FrequencyTier {
        if count >= self.high {
            FrequencyTier::Frequent
        } else if count <= self.low {
            FrequencyTier::Rare
        } else {
            FrequencyTier::Median
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolCategories {
    pub pool: Pool,
    pub most: Vec<u8>,
    pub least: Vec<u8>,
    pub median: Vec<u8>,
    pub median_value: f64,
    pub thresholds: TercileThresholds,
    pub tiers: BTreeMap<u8, FrequencyTier>,
}

impl PoolCategories {
    pub fn tier(&self, number: u8) -> Option<FrequencyTier> {
        self.tiers.get(&number).copied()
    }

    pub fn numbers_in(&self, tier: FrequencyTier) -> Vec<u8> {
        self.tiers
            .iter()
            .filter(|(_, &t)| t == tier)
            .map(|(&n, _)| n)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyCategories {
    pub main: PoolCategories,
    pub stars: PoolCategories,
}

impl FrequencyCategories {
    pub fn most_main(&self) -> &[u8] {
        &self.main.most
    }

    pub fn least_main(&self) -> &[u8] {
        &self.main.least
    }

    pub fn median_main(&self) -> &[u8] {
        &self.main.median
    }

    pub fn most_stars(&self) -> &[u8] {
        &self.stars.most
    }

    pub fn least_stars(&self) -> &[u8] {
        &self.stars.least
    }

    pub fn median_stars(&self) -> &[u8] {
        &self.stars.median
    }
}

/// Paires (numéro, fréquence) triées par fréquence décroissante.
/// Tri stable : à fréquence égale, l'ordre croissant des numéros est conservé.
pub fn rank_by_frequency(freq: &NumberFrequency) -> Vec<(u8, u32)> {
    let mut ranked: Vec<(u8, u32)> = freq.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

pub fn median_frequency(freq: &NumberFrequency) -> Option<f64> {
    let mut values = freq.values();
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    } else {
        values[mid] as f64
    };
    Some(median)
}

pub fn tercile_thresholds(freq: &NumberFrequency) -> Option<TercileThresholds> {
    let mut values = freq.values();
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(|a, b| b.cmp(a));
    let n = values.len();
    let size = (n / 3).max(1);
    Some(TercileThresholds {
        high: values[size - 1],
        low: values[n - size],
    })
}

pub fn categorize_pool(freq: &NumberFrequency) -> Result<PoolCategories> {
    let pool = freq.pool();
    let (Some(median_value), Some(thresholds)) = (median_frequency(freq), tercile_thresholds(freq))
    else {
        bail!("{} : impossible de catégoriser une table vide", pool.label());
    };
    let k = pool.pick_count();

    let ranked = rank_by_frequency(freq);
    let most: Vec<u8> = ranked.iter().take(k).map(|&(n, _)| n).collect();
    let least: Vec<u8> = ranked[ranked.len().saturating_sub(k)..]
        .iter()
        .map(|&(n, _)| n)
        .collect();

    let median: Vec<u8> = freq
        .iter()
        .filter(|&(_, c)| (c as f64 - median_value).abs() <= 1.0)
        .map(|(n, _)| n)
        .take(k)
        .collect();

    let tiers = freq
        .iter()
        .map(|(n, c)| (n, thresholds.classify(c)))
        .collect();

    log::debug!(
        "{}: médiane={median_value}, seuils haut={} bas={}",
        pool.label(),
        thresholds.high,
        thresholds.low
    );

    Ok(PoolCategories {
        pool,
        most,
        least,
        median,
        median_value,
        thresholds,
        tiers,
    })
}

pub fn categorize(main: &NumberFrequency, stars: &NumberFrequency) -> Result<FrequencyCategories> {
    if main.pool() != Pool::Balls || stars.pool() != Pool::Stars {
        bail!("Tables inversées : attendu boules puis étoiles");
    }
    Ok(FrequencyCategories {
        main: categorize_pool(main)?,
        stars: categorize_pool(stars)?,
    })
}
