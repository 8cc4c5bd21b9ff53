use clap::Parser;
use sealpool_core::{
    ExclusionRules, PoolConfig, SealedPools, Side, DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_DIR,
    DEFAULT_POOL_SIZE, DEFAULT_SEED,
};
use sealpool_data::{load_candidates, write_pool_file};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sealpool", version, about = "Build seeded sealed pools for both sides")]
struct Cli {
    /// Cards drawn for each side.
    #[arg(long = "cards-per-deck", alias = "cards_per_deck", default_value_t = DEFAULT_POOL_SIZE)]
    cards_per_deck: usize,
    /// Reuse a seed to regenerate the same pools.
    #[arg(
        long = "random-seed",
        alias = "random_seed",
        default_value_t = DEFAULT_SEED,
        allow_negative_numbers = true
    )]
    random_seed: i64,
    /// Card catalog, a JSON array of cards.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    input: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    #[arg(long = "exclude-type", value_name = "TYPE_CODE")]
    exclude_types: Vec<String>,
    #[arg(long = "exclude-set", value_name = "SET_CODE")]
    exclude_sets: Vec<String>,
    #[arg(long = "exclude-cycle", value_name = "CYCLE", allow_negative_numbers = true)]
    exclude_cycles: Vec<i64>,
    /// Start from an empty rule set instead of identity/special/alt/cycle 6.
    #[arg(long)]
    no_default_exclusions: bool,
    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn config(&self) -> PoolConfig {
        let mut rules = if self.no_default_exclusions {
            ExclusionRules::empty()
        } else {
            ExclusionRules::default()
        };
        rules.type_codes.extend(self.exclude_types.iter().cloned());
        rules.set_codes.extend(self.exclude_sets.iter().cloned());
        rules.cycle_numbers.extend(self.exclude_cycles.iter().copied());
        PoolConfig {
            pool_size: self.cards_per_deck,
            seed: self.random_seed,
            catalog_path: self.input.clone(),
            output_dir: self.output_dir.clone(),
            rules,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let lists = load_candidates(&config.catalog_path, &config.rules)?;
    for side in Side::ALL {
        println!("Number of {} cards: {}", side.slug(), lists.len(side));
    }

    println!(
        "Generating pools of size {} with seed {}.",
        config.pool_size, config.seed
    );
    // Both pools are drawn before anything touches the output directory.
    let pools = SealedPools::draw(&lists, config.pool_size, config.rng_seed())?;

    for side in Side::ALL {
        let path = config.output_path(side);
        write_pool_file(&path, side, pools.side(side))?;
        println!("Finished writing to {}", path.display());
    }
    Ok(())
}
