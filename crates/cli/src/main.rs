use anyhow::Context;
use clap::Parser;
use d5sim_data::{parse_seed, resolve_config, ConfigOverrides};
use d5sim_session::{
    log_header, log_row, road_lines, run_shoes, summary_line, write_json, write_text,
    MultiShoeSummary, Session, SessionConfig,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Deals baccarat shoes, bets the D5 strategy and prints the results.
#[derive(Parser, Debug)]
#[command(name = "d5sim", version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle, decimal or 0x hex. Falls back to D5SIM_SEED,
    /// then to a random seed.
    #[arg(long, value_parser = seed_arg)]
    seed: Option<u64>,

    /// Number of independent shoes to play.
    #[arg(long, default_value_t = 1)]
    shoes: usize,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decks per shoe.
    #[arg(long)]
    decks: Option<usize>,

    /// Cards left behind the cut card.
    #[arg(long)]
    padding: Option<usize>,

    /// Big Road rows.
    #[arg(long)]
    rows: Option<usize>,

    /// Big Road columns.
    #[arg(long)]
    cols: Option<usize>,

    /// Write the single-shoe report as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the single-shoe report as text.
    #[arg(long)]
    text: Option<PathBuf>,

    /// Only print the summary.
    #[arg(short, long)]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn seed_arg(raw: &str) -> Result<u64, String> {
    parse_seed(raw).ok_or_else(|| format!("invalid seed: {raw}"))
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let overrides = ConfigOverrides {
        seed: args.seed,
        deck_count: args.decks,
        cut_card_padding: args.padding,
        rows: args.rows,
        cols: args.cols,
    };
    let sim = resolve_config(args.config.as_deref(), overrides)?;

    if args.shoes == 0 {
        anyhow::bail!("--shoes must be at least 1");
    }
    if args.shoes > 1 {
        let summary = run_shoes(&sim, args.shoes).context("run shoes")?;
        print_multi(&summary, args.quiet);
        return Ok(());
    }

    let mut session = Session::new(SessionConfig::new(sim)).context("start session")?;
    let dealt = session.fast_forward();
    info!(dealt, seed = session.seed(), "shoe dealt");
    let report = session.report();

    if !args.quiet {
        println!("seed {:#x}", report.seed);
        println!();
        println!("{}", log_header());
        for hand in &report.hands {
            println!("{}", log_row(hand));
        }
        println!();
        println!("big road:");
        let grid = report.grid();
        for line in road_lines(&grid) {
            println!("  {line}");
        }
        if grid.trailing_ties > 0 {
            println!("  (+{} trailing tie(s) not on the road)", grid.trailing_ties);
        }
        println!();
    }
    println!("{}", summary_line(&report.stats));

    if let Some(path) = args.json.as_ref() {
        write_json(path, &report).with_context(|| format!("write {}", path.display()))?;
    }
    if let Some(path) = args.text.as_ref() {
        write_text(path, &report).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

fn print_multi(summary: &MultiShoeSummary, quiet: bool) {
    if !quiet {
        for (idx, shoe) in summary.shoes.iter().enumerate() {
            println!(
                "shoe {:>3} seed {:#x}: {}",
                idx + 1,
                shoe.seed,
                summary_line(&shoe.stats)
            );
        }
        println!();
    }
    let win_rate = summary
        .win_rate()
        .map(|rate| format!("{:.2}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{} shoes from seed {:#x} | hands {} | balance {:+} | winning shoes {} | win rate {}",
        summary.shoes.len(),
        summary.base_seed,
        summary.total_hands(),
        summary.total_balance(),
        summary.winning_shoes(),
        win_rate
    );
    if let (Some(best), Some(worst)) = (summary.best(), summary.worst()) {
        println!(
            "best {:+} (seed {:#x}) | worst {:+} (seed {:#x})",
            best.stats.final_balance, best.seed, worst.stats.final_balance, worst.seed
        );
    }
}
