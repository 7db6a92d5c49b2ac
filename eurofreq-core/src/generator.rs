use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::categories::FrequencyCategories;
use crate::models::{Pool, Ticket};
use crate::sampler::Sampler;

/// Boules prises dans chaque catégorie : (plus fréquentes, moins fréquentes, médianes).
const MAIN_PLAN: (usize, usize, usize) = (2, 2, 1);
/// Étoiles prises dans chaque catégorie : (plus fréquentes, moins fréquentes).
const STAR_PLAN: (usize, usize) = (1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Random,
    Frequency,
}

impl std::fmt::Display for TicketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketKind::Random => write!(f, "Ticket aléatoire"),
            TicketKind::Frequency => write!(f, "Ticket basé sur la fréquence"),
        }
    }
}

fn into_array<const N: usize>(numbers: Vec<u8>) -> Result<[u8; N]> {
    <[u8; N]>::try_from(numbers)
        .map_err(|v| anyhow!("Attendu {} numéros, obtenu {}", N, v.len()))
}

pub fn generate_random_ticket_with<S: Sampler + ?Sized>(sampler: &mut S) -> Result<Ticket> {
    let balls = sampler.sample_distinct(&Pool::Balls.numbers(), Pool::Balls.pick_count())?;
    let stars = sampler.sample_distinct(&Pool::Stars.numbers(), Pool::Stars.pick_count())?;
    Ok(Ticket::sorted(into_array(balls)?, into_array(stars)?))
}

/// Grille uniforme tirée avec le générateur du thread courant.
pub fn generate_random_ticket() -> Result<Ticket> {
    generate_random_ticket_with(&mut rand::rng())
}

/// Grille pondérée par les catégories de fréquence.
///
/// Les boules sont prises dans les trois catégories puis retirées au sort.
/// Si les catégories se recouvrent et que le lot compte moins de cinq
/// numéros distincts, le lot est gardé tel quel, doublons compris : la
/// grille obtenue peut alors échouer à [`Ticket::validate`].
pub fn generate_frequency_ticket_with<S: Sampler + ?Sized>(
    categories: &FrequencyCategories,
    sampler: &mut S,
) -> Result<Ticket> {
    let (from_most, from_least, from_median) = MAIN_PLAN;
    let mut main_pool = Vec::with_capacity(from_most + from_least + from_median);
    main_pool.extend(sampler.sample_distinct(categories.most_main(), from_most)?);
    main_pool.extend(sampler.sample_distinct(categories.least_main(), from_least)?);
    main_pool.extend(sampler.sample_distinct(categories.median_main(), from_median)?);

    let (stars_most, stars_least) = STAR_PLAN;
    let mut star_pool = Vec::with_capacity(stars_most + stars_least);
    star_pool.extend(sampler.sample_distinct(categories.most_stars(), stars_most)?);
    star_pool.extend(sampler.sample_distinct(categories.least_stars(), stars_least)?);

    log::debug!("Lot de boules {:?}, lot d'étoiles {:?}", main_pool, star_pool);

    let mut distinct = main_pool.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let pick = Pool::Balls.pick_count();
    let balls = if distinct.len() >= pick {
        sampler.sample_distinct(&main_pool, pick)?
    } else {
        log::warn!(
            "Seulement {} boules distinctes dans le lot {:?}, lot conservé tel quel",
            distinct.len(),
            main_pool
        );
        main_pool
    };

    Ok(Ticket::sorted(into_array(balls)?, into_array(star_pool)?))
}

pub fn generate_frequency_ticket(categories: &FrequencyCategories) -> Result<Ticket> {
    generate_frequency_ticket_with(categories, &mut rand::rng())
}

pub fn generate_tickets<S: Sampler + ?Sized>(
    kind: TicketKind,
    count: usize,
    categories: &FrequencyCategories,
    sampler: &mut S,
) -> Result<Vec<Ticket>> {
    let mut tickets = Vec::with_capacity(count);
    for _ in 0..count {
        let ticket = match kind {
            TicketKind::Random => generate_random_ticket_with(sampler)?,
            TicketKind::Frequency => generate_frequency_ticket_with(categories, sampler)?,
        };
        tickets.push(ticket);
    }
    Ok(tickets)
}
