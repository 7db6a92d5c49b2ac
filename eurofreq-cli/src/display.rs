use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use eurofreq_core::categories::{FrequencyCategories, PoolCategories};
use eurofreq_core::frequency::{NumberFrequency, HISTORICAL_DRAWS};
use eurofreq_core::generator::TicketKind;
use eurofreq_core::models::{FrequencyTier, Ticket};

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyRow {
    pub number: u8,
    pub percentage: f64,
    pub draws: u32,
    pub tier: FrequencyTier,
}

/// Lignes du tableau, triées par fréquence décroissante puis numéro croissant.
pub fn frequency_rows(freq: &NumberFrequency, categories: &PoolCategories) -> Vec<FrequencyRow> {
    let mut rows: Vec<FrequencyRow> = freq
        .iter()
        .map(|(number, draws)| FrequencyRow {
            number,
            percentage: freq.percentage(number).unwrap_or_default(),
            draws,
            tier: categories.tier(number).unwrap_or(FrequencyTier::Median),
        })
        .collect();
    rows.sort_by(|a, b| b.draws.cmp(&a.draws));
    rows
}

pub fn format_list(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_grid(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn tier_color(tier: FrequencyTier) -> Color {
    match tier {
        FrequencyTier::Frequent => Color::Green,
        FrequencyTier::Rare => Color::Red,
        FrequencyTier::Median => Color::White,
    }
}

pub fn display_analysis(categories: &FrequencyCategories) {
    println!("\n📊 Analyse de fréquence ({} tirages)\n", HISTORICAL_DRAWS);
    println!("Numéros principaux les plus fréquents : {}", format_list(categories.most_main()));
    println!("Numéros principaux les moins fréquents : {}", format_list(categories.least_main()));
    println!(
        "Numéros principaux à fréquence médiane : {} (médiane {})",
        format_list(categories.median_main()),
        categories.main.median_value
    );
    println!("Étoiles les plus fréquentes : {}", format_list(categories.most_stars()));
    println!("Étoiles les moins fréquentes : {}", format_list(categories.least_stars()));
    println!(
        "Étoiles à fréquence médiane : {} (médiane {})",
        format_list(categories.median_stars()),
        categories.stars.median_value
    );
}

pub fn display_frequency_table(rows: &[FrequencyRow], categories: &PoolCategories) {
    println!(
        "\n── {} (seuils : ≥ {} / ≤ {}) ──",
        categories.pool.label(),
        categories.thresholds.high,
        categories.thresholds.low
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Pourcentage", "Tirages estimés", "Catégorie"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{:2}", row.number)),
            Cell::new(format!("{:.2} %", row.percentage)),
            Cell::new(row.draws.to_string()),
            Cell::new(row.tier.to_string()).fg(tier_color(row.tier)),
        ]);
    }
    println!("{table}");
}

pub fn display_tickets(kind: TicketKind, tickets: &[Ticket]) {
    println!("\n🎲 {}\n", kind);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros principaux", "Étoiles"]);

    for (i, ticket) in tickets.iter().enumerate() {
        let balls = Cell::new(format_grid(&ticket.balls));
        let balls = if ticket.is_valid() { balls } else { balls.fg(Color::Yellow) };
        table.add_row(vec![
            Cell::new(i + 1),
            balls,
            Cell::new(format_grid(&ticket.stars)),
        ]);
    }
    println!("{table}");

    if tickets.iter().any(|t| !t.is_valid()) {
        println!("Attention : catégories qui se recouvrent, certaines grilles contiennent des doublons.");
    }
}

pub fn display_disclaimer() {
    println!(
        "\nRemarque : cet outil génère des numéros EuroMillions à des fins de divertissement. \
         Les tirages de loterie sont aléatoires, et les fréquences passées ne garantissent pas de gains futurs."
    );
}
