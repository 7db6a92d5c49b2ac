use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use eurofreq_core::frequency::NumberFrequency;
use eurofreq_core::models::Pool;

/// Table de pourcentages au format JSON : `{"main": {"17": 15.5, ...}, "stars": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFile {
    pub main: BTreeMap<u8, f64>,
    pub stars: BTreeMap<u8, f64>,
}

impl TableFile {
    pub fn from_frequencies(main: &NumberFrequency, stars: &NumberFrequency) -> Self {
        let percentages = |freq: &NumberFrequency| -> BTreeMap<u8, f64> {
            freq.numbers()
                .into_iter()
                .filter_map(|n| freq.percentage(n).map(|p| (n, p)))
                .collect()
        };
        Self {
            main: percentages(main),
            stars: percentages(stars),
        }
    }

    pub fn into_frequencies(self) -> Result<(NumberFrequency, NumberFrequency)> {
        let main: Vec<(u8, f64)> = self.main.into_iter().collect();
        let stars: Vec<(u8, f64)> = self.stars.into_iter().collect();
        Ok((
            NumberFrequency::from_percentages(Pool::Balls, &main)?,
            NumberFrequency::from_percentages(Pool::Stars, &stars)?,
        ))
    }
}

pub fn parse_table(json: &str) -> Result<(NumberFrequency, NumberFrequency)> {
    let table: TableFile = serde_json::from_str(json).context("JSON de table invalide")?;
    table.into_frequencies()
}

pub fn load_table(path: &Path) -> Result<(NumberFrequency, NumberFrequency)> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let tables = parse_table(&json).with_context(|| format!("Table invalide dans {:?}", path))?;
    log::info!("Table de fréquences chargée depuis {:?}", path);
    Ok(tables)
}

pub fn save_table(path: &Path, table: &TableFile) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    std::fs::write(path, json).with_context(|| format!("Impossible d'écrire {:?}", path))?;
    Ok(())
}
