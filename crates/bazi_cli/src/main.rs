use std::path::PathBuf;

use anyhow::{Context, Result};
use bazi_rs::{
    Branch, ChartConfig, ChartInfo, ElementTally, Pillar, PillarDetail, Stem, compute_chart_with,
    compute_element_tally_with, compute_surface_tally, life_stage, nacchin, solar_term_cutover,
    ten_god, void_pair,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bazi", about = "Four Pillars (四柱推命) chart calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// JSON chart configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full annotated chart for a local date-time
    Chart {
        /// YYYY-MM-DDThh:mm, YYYY-MM-DD hh:mm or YYYY-MM-DD
        date_time: String,
    },
    /// The four pillars only
    Pillars {
        /// YYYY-MM-DDThh:mm, YYYY-MM-DD hh:mm or YYYY-MM-DD
        date_time: String,
    },
    /// Five-element balance
    Tally {
        /// YYYY-MM-DDThh:mm, YYYY-MM-DD hh:mm or YYYY-MM-DD
        date_time: String,
        /// Count visible stems and branches only
        #[arg(long)]
        surface: bool,
    },
    /// Ten-god of a stem as seen from a Day Master
    TenGod {
        /// Day Master stem (甲..癸)
        day_master: Stem,
        /// Other stem (甲..癸)
        other: Stem,
    },
    /// Life-stage of a Day Master in a branch
    LifeStage {
        /// Day Master stem (甲..癸)
        day_master: Stem,
        /// Branch (子..亥)
        branch: Branch,
    },
    /// Nacchin of a pillar
    Nacchin {
        /// Stem/branch pair, e.g. 甲子
        pillar: Pillar,
    },
    /// Void pair of a day pillar
    Void {
        /// Day pillar, e.g. 庚辰
        day_pillar: Pillar,
    },
    /// Estimated sectional term of a Gregorian month
    SolarTerm {
        year: i32,
        /// Month 1-12
        month: u32,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig> {
    match path {
        Some(p) => {
            let config = ChartConfig::from_file(p)
                .with_context(|| format!("loading config {}", p.display()))?;
            debug!(path = %p.display(), "config loaded");
            Ok(config)
        }
        None => Ok(ChartConfig::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let json = cli.json;

    match cli.command {
        Commands::Chart { date_time } => {
            let info = compute_chart_with(&date_time, &config)?;
            if json {
                print_json(&info)?;
            } else {
                print_chart(&info);
            }
        }

        Commands::Pillars { date_time } => {
            let info = compute_chart_with(&date_time, &config)?;
            let pillars = info.pillars();
            if json {
                print_json(pillars)?;
            } else {
                println!(
                    "{} {} {} {}",
                    pillars.year, pillars.month, pillars.day, pillars.hour
                );
            }
        }

        Commands::Tally { date_time, surface } => {
            let info = compute_chart_with(&date_time, &config)?;
            let tally = if surface {
                compute_surface_tally(&info)
            } else {
                compute_element_tally_with(&info, &config)
            };
            if json {
                print_json(&tally)?;
            } else {
                print_tally(&tally);
            }
        }

        Commands::TenGod { day_master, other } => {
            let god = ten_god(day_master, other);
            if json {
                print_json(&json!({ "day_master": day_master, "other": other, "ten_god": god }))?;
            } else {
                println!("{day_master} → {other}: {}", god.name());
            }
        }

        Commands::LifeStage { day_master, branch } => {
            let stage = life_stage(day_master, branch);
            if json {
                print_json(&json!({ "life_stage": stage, "power": stage.power() }))?;
            } else {
                println!("{day_master} in {branch}: {} (power {})", stage.name(), stage.power());
            }
        }

        Commands::Nacchin { pillar } => {
            let n = nacchin(pillar);
            if json {
                print_json(&json!({ "pillar": pillar, "nacchin": n, "element": n.element() }))?;
            } else {
                println!("{pillar}: {} ({})", n.name(), n.element().name());
            }
        }

        Commands::Void { day_pillar } => {
            let pair = void_pair(day_pillar);
            if json {
                print_json(&json!({ "day_pillar": day_pillar, "void_pair": pair }))?;
            } else {
                println!("{day_pillar}: {pair}");
            }
        }

        Commands::SolarTerm { year, month } => {
            let c = solar_term_cutover(year, month)?;
            if json {
                print_json(&c)?;
            } else {
                println!(
                    "{} {:04}-{:02}-{:02} {:02}:{:02}",
                    c.term.name(),
                    c.year,
                    c.month,
                    c.day,
                    c.hour,
                    c.minute
                );
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_chart(info: &ChartInfo) {
    let chart = &info.chart;
    println!("Date: {}", chart.civil);
    println!(
        "Bazi year {}, month {} (since {} {:04}-{:02}-{:02})",
        chart.bazi_year,
        chart.bazi_month.ordinal,
        chart.bazi_month.term.term.name(),
        chart.bazi_month.term.year,
        chart.bazi_month.term.month,
        chart.bazi_month.term.day
    );
    println!("Day Master: {}", info.day_master);
    println!("Void pair: {}", info.void_pair);
    println!();
    for (_, d) in info.details.iter() {
        print_detail(d);
    }
}

fn print_detail(d: &PillarDetail) {
    let hidden: String = d.hidden_stems.iter().map(|s| s.name()).collect();
    let hidden_gods: Vec<&str> = d.hidden_ten_gods.iter().map(|g| g.name()).collect();
    let stars: Vec<&str> = d.special_stars.iter().map(|s| s.name()).collect();
    println!(
        "{} {}  {} / {}  蔵干 {} [{}]  {} ({})  {}{}{}",
        d.position.name(),
        d.pillar,
        d.stem_ten_god.map_or("日主", |g| g.name()),
        d.branch_ten_god.name(),
        hidden,
        hidden_gods.join(" "),
        d.life_stage.name(),
        d.power,
        d.nacchin.name(),
        if stars.is_empty() {
            String::new()
        } else {
            format!("  {}", stars.join(" "))
        },
        if d.is_void { "  空亡" } else { "" }
    );
}

fn print_tally(tally: &ElementTally) {
    for (e, w) in tally.iter() {
        println!("{} {w:.1}", e.name());
    }
    println!("total {:.1}", tally.total());
    if let Some(e) = tally.dominant() {
        println!("dominant {}", e.name());
    }
    let lacking: Vec<&str> = tally.lacking().iter().map(|e| e.name()).collect();
    if !lacking.is_empty() {
        println!("lacking {}", lacking.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bazi", "chart", "1990-01-15T08:30", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Chart { .. }));
    }

    #[test]
    fn parses_kanji_arguments() {
        let cli = Cli::try_parse_from(["bazi", "ten-god", "甲", "庚"]).unwrap();
        match cli.command {
            Commands::TenGod { day_master, other } => {
                assert_eq!(day_master, Stem::Kinoe);
                assert_eq!(other, Stem::Kanoe);
            }
            _ => panic!("wrong subcommand"),
        }
        assert!(Cli::try_parse_from(["bazi", "nacchin", "甲丑"]).is_err());
    }

    #[test]
    fn run_reports_bad_dates() {
        let cli = Cli::try_parse_from(["bazi", "pillars", "2023-02-30"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn missing_config_is_an_error() {
        let cli =
            Cli::try_parse_from(["bazi", "--config", "/nonexistent.json", "void", "庚辰"]).unwrap();
        assert!(run(cli).is_err());
    }
}
