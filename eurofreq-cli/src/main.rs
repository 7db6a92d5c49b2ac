mod display;
mod table_file;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use eurofreq_core::categories::{categorize, FrequencyCategories};
use eurofreq_core::frequency::{load_frequencies, NumberFrequency};
use eurofreq_core::generator::{
    generate_frequency_ticket, generate_random_ticket, generate_tickets, TicketKind,
};
use eurofreq_core::models::Ticket;
use eurofreq_core::sampler::make_rng;

use crate::display::{
    display_analysis, display_disclaimer, display_frequency_table, display_tickets,
    frequency_rows,
};
use crate::table_file::{load_table, save_table, TableFile};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum PoolArg {
    #[default]
    Boules,
    Etoiles,
}

#[derive(Parser)]
#[command(name = "eurofreq", about = "Générateur de numéros EuroMillions")]
struct Cli {
    /// Fichier JSON de pourcentages remplaçant la table intégrée
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Sortie JSON au lieu des tableaux
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Afficher les catégories de fréquence
    Analyse,

    /// Afficher la fréquence et la catégorie de chaque numéro
    Tableau {
        /// Domaine à afficher
        #[arg(short, long, default_value = "boules")]
        pool: PoolArg,
    },

    /// Générer des tickets aléatoires
    Aleatoire {
        /// Nombre de tickets
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Générer des tickets basés sur la fréquence
    Frequence {
        /// Nombre de tickets
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Exporter la table de pourcentages en JSON
    Exporter {
        /// Fichier de sortie
        #[arg(short, long, default_value = "frequences.json")]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct PageReport<'a> {
    categories: &'a FrequencyCategories,
    random: Ticket,
    frequency: Ticket,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (main_freq, star_freq) = match &cli.table {
        Some(path) => load_table(path)?,
        None => load_frequencies(),
    };
    let categories = categorize(&main_freq, &star_freq)?;

    match cli.command {
        None => cmd_page(&categories, cli.json),
        Some(Command::Analyse) => cmd_analyse(&categories, cli.json),
        Some(Command::Tableau { pool }) => {
            cmd_tableau(&main_freq, &star_freq, &categories, pool, cli.json)
        }
        Some(Command::Aleatoire { count, seed }) => {
            cmd_tickets(&categories, TicketKind::Random, count, seed, cli.json)
        }
        Some(Command::Frequence { count, seed }) => {
            cmd_tickets(&categories, TicketKind::Frequency, count, seed, cli.json)
        }
        Some(Command::Exporter { output }) => cmd_export(&main_freq, &star_freq, &output),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_page(categories: &FrequencyCategories, json: bool) -> Result<()> {
    let random = generate_random_ticket()?;
    let frequency = generate_frequency_ticket(categories)?;

    if json {
        let report = PageReport {
            categories,
            random,
            frequency,
        };
        return print_json(&report);
    }

    display_analysis(categories);
    display_tickets(TicketKind::Random, std::slice::from_ref(&random));
    display_tickets(TicketKind::Frequency, std::slice::from_ref(&frequency));
    display_disclaimer();
    Ok(())
}

fn cmd_analyse(categories: &FrequencyCategories, json: bool) -> Result<()> {
    if json {
        return print_json(categories);
    }
    display_analysis(categories);
    Ok(())
}

fn cmd_tableau(
    main_freq: &NumberFrequency,
    star_freq: &NumberFrequency,
    categories: &FrequencyCategories,
    pool: PoolArg,
    json: bool,
) -> Result<()> {
    let (freq, pool_categories) = match pool {
        PoolArg::Boules => (main_freq, &categories.main),
        PoolArg::Etoiles => (star_freq, &categories.stars),
    };
    let rows = frequency_rows(freq, pool_categories);
    if json {
        return print_json(&rows);
    }
    display_frequency_table(&rows, pool_categories);
    Ok(())
}

fn cmd_tickets(
    categories: &FrequencyCategories,
    kind: TicketKind,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let tickets = generate_tickets(kind, count, categories, &mut rng)?;
    log::debug!("{} tickets générés ({:?}, seed={:?})", tickets.len(), kind, seed);
    if json {
        return print_json(&tickets);
    }
    display_tickets(kind, &tickets);
    display_disclaimer();
    Ok(())
}

fn cmd_export(main_freq: &NumberFrequency, star_freq: &NumberFrequency, output: &Path) -> Result<()> {
    save_table(output, &TableFile::from_frequencies(main_freq, star_freq))?;
    println!("Table de fréquences exportée dans {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["eurofreq", "frequence", "-c", "3", "--seed", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Frequence { count: 3, seed: Some(42) })
        ));

        let cli = Cli::try_parse_from(["eurofreq", "tableau", "--pool", "etoiles", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Command::Tableau { pool: PoolArg::Etoiles })));

        let cli = Cli::try_parse_from(["eurofreq"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.table.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_pool() {
        assert!(Cli::try_parse_from(["eurofreq", "tableau", "--pool", "lune"]).is_err());
    }
}
