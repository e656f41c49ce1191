//! delve: inspect the item engine from the command line
//!
//! Lists the catalog, rolls and describes items, samples the normal table
//! and resolves blows per round.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use delve_core::combat::attack_blows;
use delve_core::object::{ItemCategory, MkItemContext, TemplateId, create_item, describe, stack_into};
use delve_core::sampler::randnor;
use delve_core::{GameRng, ItemRules};
use delve_data::{flavor_session, standard_registry};

/// Item engine inspector
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Inspect the delve item catalog and its random rolls", long_about = None)]
struct Args {
    /// Item rules as JSON; missing fields keep their defaults
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog templates
    Catalog {
        /// Only this category (e.g. Ring, HardArmor)
        #[arg(long)]
        category: Option<ItemCategory>,
    },

    /// Create items from a template and show the resulting piles
    Roll {
        /// Template id (catalog row)
        template: u16,

        /// Dungeon depth; without it items are mundane
        #[arg(short, long)]
        depth: Option<u8>,

        /// Number of items to create
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Quantity for each created item
        #[arg(short, long)]
        quantity: Option<u16>,

        /// Identify items before describing them
        #[arg(short, long)]
        identify: bool,

        /// Inscription for every created item
        #[arg(long)]
        inscribe: Option<String>,

        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// Draw from the discretized normal distribution
    Normal {
        #[arg(short = 'n', long, default_value_t = 10_000)]
        draws: u32,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        mean: i32,

        #[arg(long, default_value_t = 64)]
        sd: i32,

        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// Blows per round for a wielder and weapon
    Blows {
        /// Strength, 3..=118 where 18/xx is 18 + xx
        #[arg(long)]
        strength: u8,

        /// Dexterity, same scale as strength
        #[arg(long)]
        dexterity: u8,

        /// Weapon weight in tenths of a pound
        #[arg(long)]
        weight: u16,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let rules = match &args.config {
        Some(path) => load_rules(path)?,
        None => ItemRules::default(),
    };

    match args.command {
        Command::Catalog { category } => catalog(category),
        Command::Roll {
            template,
            depth,
            count,
            quantity,
            identify,
            inscribe,
            seed,
        } => roll(
            &rules,
            TemplateId(template),
            depth,
            count,
            quantity,
            identify,
            inscribe.as_deref(),
            seed,
        )?,
        Command::Normal {
            draws,
            mean,
            sd,
            seed,
        } => normal(draws, mean, sd, seed)?,
        Command::Blows {
            strength,
            dexterity,
            weight,
        } => {
            let profile = attack_blows(strength, dexterity, weight);
            println!("blows: {}", profile.blows);
            if profile.weight_to_hit != 0 {
                println!("to-hit: {:+} (weapon too heavy)", profile.weight_to_hit);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn load_rules(path: &Path) -> Result<ItemRules> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let rules: ItemRules = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded item rules");
    Ok(rules)
}

fn catalog(category: Option<ItemCategory>) {
    let registry = standard_registry();
    for template in registry.iter() {
        if category.is_some_and(|c| c != template.category()) {
            continue;
        }
        println!(
            "{:>4}  {:<13} {:>3}  {:<10} {}",
            template.id.0,
            template.category().to_string(),
            template.stack_code(),
            format!("{:?}", template.stack_policy()),
            template.def.plain_name(),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn roll(
    rules: &ItemRules,
    template: TemplateId,
    depth: Option<u8>,
    count: u32,
    quantity: Option<u16>,
    identify: bool,
    inscription: Option<&str>,
    seed: u64,
) -> Result<()> {
    let registry = standard_registry();
    let mut session = flavor_session(seed);
    let mut rng = GameRng::new(seed);
    let mut ctx = MkItemContext::new().with_rules(rules.magic);
    ctx.set_depth(depth);

    let mut pile = Vec::new();
    for _ in 0..count {
        let mut item = create_item(&mut ctx, registry, &mut rng, template, quantity)
            .with_context(|| format!("rolling template {template}"))?;
        if identify {
            item.identify();
            session.learn(registry.lookup(template)?);
        }
        if let Some(text) = inscription {
            let shown = describe(&item, registry, &session, true);
            item.set_inscription(&rules.clip_inscription(&shown, text));
        }
        stack_into(&mut pile, item);
    }

    for item in &pile {
        println!("{}", describe(item, registry, &session, true));
    }
    Ok(())
}

fn normal(draws: u32, mean: i32, sd: i32, seed: u64) -> Result<()> {
    if draws == 0 {
        bail!("need at least one draw");
    }
    let mut rng = GameRng::new(seed);
    let values: Vec<i32> = (0..draws).map(|_| randnor(&mut rng, mean, sd)).collect();

    let n = f64::from(draws);
    let avg = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| (f64::from(v) - avg).powi(2))
        .sum::<f64>()
        / n;
    let min = values.iter().min().copied().unwrap_or(mean);
    let max = values.iter().max().copied().unwrap_or(mean);

    println!("draws: {draws}");
    println!("mean:  {avg:.3}");
    println!("sd:    {:.3}", var.sqrt());
    println!("range: {min}..={max}");
    Ok(())
}
