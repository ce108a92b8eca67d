use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use word_hunt::{
    Category, GameConfig, GameSession, JsonFileStore, MemoryStore, PointsCoordinator, RecordStore,
};

#[derive(Parser, Debug)]
#[command(name = "word_hunt")]
#[command(about = "Plays a timed word search and prints the grid")]
#[command(version)]
struct Args {
    /// Word category to play (animals, colors, fruits, school)
    category: Option<Category>,

    /// TOML file overriding the game settings
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// JSON file keeping best times between runs
    #[arg(long)]
    records: Option<PathBuf>,

    /// Seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("word_hunt=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let category = args.category.unwrap_or_default();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut store: Box<dyn RecordStore> = match &args.records {
        Some(path) => Box::new(
            JsonFileStore::open(path)
                .with_context(|| format!("opening records at {}", path.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut coordinator = PointsCoordinator::new();

    let mut session =
        GameSession::start(config, category, &mut rng, &mut coordinator, &mut *store)?;

    println!("{}", session);

    // play the game by tracing every hidden word, a few seconds apart
    let size = session.grid().size();
    let placements = session.placements().to_vec();

    for placement in placements {
        for _ in 0..5 {
            session.tick();
        }

        let cells = placement.indices(size);
        if let (Some(&first), Some(&last)) = (cells.first(), cells.last()) {
            session.begin_selection(last);
            session.extend_selection(first);
            session.release_selection();
        }
    }

    println!("{}", session);

    if let Some(summary) = session.summary() {
        info!(
            outcome = ?summary.outcome,
            score = summary.score,
            found = summary.words_found,
            total = summary.words_total,
            "game over"
        );
    }

    drop(session);
    println!(
        "{} points, level: {}",
        coordinator.total_points(),
        coordinator.level()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn records_do_not_need_config() {
        let args =
            Args::try_parse_from(["word_hunt", "fruits", "--records", "records.json"]).unwrap();

        assert_eq!(args.category, Some(Category::Fruits));
        assert_eq!(args.config, None);
        assert_eq!(args.records, Some(PathBuf::from("records.json")));
    }

    #[test]
    fn rejects_unknown_category_and_extra_args() {
        assert!(Args::try_parse_from(["word_hunt", "dinosaurs"]).is_err());
        assert!(Args::try_parse_from(["word_hunt", "animals", "records.json"]).is_err());
    }
}
