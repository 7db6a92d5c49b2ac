use anyhow::{Result, bail};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    Balls,
    Stars,
}

impl Pool {
    pub fn size(&self) -> usize {
        match self {
            Pool::Balls => 50,
            Pool::Stars => 12,
        }
    }

    pub fn pick_count(&self) -> usize {
        match self {
            Pool::Balls => 5,
            Pool::Stars => 2,
        }
    }

    /// Tous les numéros du domaine, en ordre croissant.
    pub fn numbers(&self) -> Vec<u8> {
        (1..=self.size() as u8).collect()
    }

    pub fn contains(&self, number: u8) -> bool {
        number >= 1 && number as usize <= self.size()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pool::Balls => "Numéros principaux",
            Pool::Stars => "Étoiles",
        }
    }
}

/// Classement d'un numéro par tercile de fréquence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrequencyTier {
    Frequent,
    Median,
    Rare,
}

impl std::fmt::Display for FrequencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyTier::Frequent => write!(f, "Plus fréquent"),
            FrequencyTier::Median => write!(f, "Fréquence médiane"),
            FrequencyTier::Rare => write!(f, "Moins fréquent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub balls: [u8; 5],
    pub stars: [u8; 2],
}

impl Ticket {
    /// Construit une grille triée ; le contenu n'est pas validé.
    pub fn sorted(mut balls: [u8; 5], mut stars: [u8; 2]) -> Self {
        balls.sort();
        stars.sort();
        Self { balls, stars }
    }

    pub fn validate(&self) -> Result<()> {
        validate_ticket(&self.balls, &self.stars)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Vérifie qu'une sélection compte le bon nombre de numéros distincts du domaine.
pub fn validate_numbers(pool: Pool, numbers: &[u8]) -> Result<()> {
    if numbers.len() != pool.pick_count() {
        bail!(
            "{} : {} numéros attendus, {} reçus",
            pool.label(),
            pool.pick_count(),
            numbers.len()
        );
    }
    let mut seen = vec![false; pool.size() + 1];
    for &n in numbers {
        if !pool.contains(n) {
            bail!("{} : {} hors limites (1-{})", pool.label(), n, pool.size());
        }
        if seen[n as usize] {
            bail!("{} : {} en double", pool.label(), n);
        }
        seen[n as usize] = true;
    }
    Ok(())
}

pub fn validate_ticket(balls: &[u8; 5], stars: &[u8; 2]) -> Result<()> {
    validate_numbers(Pool::Balls, balls)?;
    validate_numbers(Pool::Stars, stars)
}
