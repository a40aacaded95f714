//! Hoops CLI
//!
//! Plays games between generated rosters, builds whole leagues and follows
//! single players through their careers.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

use hoops_core::models::{pct, predict_score, Archetype, BoxScoreLine, Team};
use hoops_core::player::PlayerGenerator;
use hoops_core::{DefaultLabels, DevelopmentEngine, GameSimulator, LeagueGenerator, SimConfig};

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Deterministic basketball league simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate two teams and play games between their starters
    Game {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of games; more than one prints a series summary
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Print play-by-play for a single game
        #[arg(long, default_value = "false")]
        verbose: bool,

        /// JSON config file (missing fields take defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Preset: "default", "high_scoring" or "defensive"
        #[arg(long, default_value = "default")]
        preset: String,

        /// Emit the game result as JSON instead of a box score
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Generate a full league of rosters
    League {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long)]
        teams: Option<usize>,

        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the league as JSON to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate one player and develop them season by season
    Develop {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 19)]
        age: u8,

        #[arg(long, default_value_t = 15)]
        seasons: u32,

        /// "point", "wing" or "big"
        #[arg(long)]
        archetype: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Game { seed, games, verbose, config, preset, json } => {
            let config = load_config(config.as_deref(), &preset)?;
            run_game(config, seed, games, verbose, json)
        }
        Commands::League { seed, teams, config, out } => {
            let mut config = load_config(config.as_deref(), "default")?;
            if let Some(teams) = teams {
                config.roster.league_size = teams;
            }
            run_league(&config, seed, out.as_deref())
        }
        Commands::Develop { seed, age, seasons, archetype } => {
            let archetype = archetype.as_deref().map(parse_archetype).transpose()?;
            run_develop(seed, age, seasons, archetype)
        }
    }
}

fn load_config(path: Option<&Path>, preset: &str) -> Result<SimConfig> {
    if let Some(path) = path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        return Ok(SimConfig::from_json(&text)?);
    }
    match preset {
        "default" => Ok(SimConfig::default()),
        "high_scoring" => Ok(SimConfig::high_scoring()),
        "defensive" => Ok(SimConfig::defensive()),
        other => bail!("unknown preset '{}'", other),
    }
}

fn parse_archetype(name: &str) -> Result<Archetype> {
    Archetype::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .with_context(|| format!("unknown archetype '{}'", name))
}

fn run_game(config: SimConfig, seed: u64, games: u32, verbose: bool, json: bool) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sim = GameSimulator::new(config)?;
    sim.setup_teams(&mut rng)?;

    if let Some((team_a, team_b)) = sim.rosters() {
        print_matchup(team_a, team_b);
    }

    if games > 1 {
        let summary = sim.simulate_series(games, &mut rng)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("\n📊 {} games", summary.games);
            println!("   Team A wins: {}", summary.wins_a);
            println!("   Team B wins: {}", summary.wins_b);
            println!("   Ties:        {}", summary.ties);
            println!("   Average:     {:.1} - {:.1}", summary.average_a(), summary.average_b());
        }
        return Ok(());
    }

    let result = sim.simulate(verbose, &mut rng)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for event in &result.events {
        println!("{}", event.text);
    }
    println!("\n🏀 Final: Team A {} - {} Team B", result.score.team_a, result.score.team_b);
    println!("   {} possessions, {}s elapsed", result.possessions, result.elapsed);
    print_box("Team A", &result.box_a);
    print_box("Team B", &result.box_b);
    Ok(())
}

fn print_matchup(team_a: &Team, team_b: &Team) {
    let (a, b) = (team_a.averages(), team_b.averages());
    for (name, avg) in [(&team_a.name, a), (&team_b.name, b)] {
        println!(
            "{:<8} OVR {:.1} | 3PT {:.1} | MID {:.1} | INS {:.1}",
            name, avg.overall, avg.three, avg.mid, avg.inside
        );
    }
    let (pa, pb) = predict_score(a.overall, b.overall);
    println!("Predicted: {} - {}", pa, pb);
}

fn print_box(team: &str, lines: &[BoxScoreLine]) {
    println!("\n{}", team);
    println!(
        "{:<24} {:>4} {:>7} {:>5} {:>7} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4}",
        "Player", "PTS", "FG", "FG%", "3PT", "FT", "REB", "AST", "STL", "BLK", "TO"
    );
    for line in lines {
        let s = &line.stats;
        println!(
            "{:<24} {:>4} {:>7} {:>5.1} {:>7} {:>7} {:>4} {:>4} {:>4} {:>4} {:>4}",
            line.name,
            s.points,
            format!("{}/{}", s.field_goals_made(), s.field_goals_attempted()),
            s.field_goal_pct() * 100.0,
            format!("{}/{}", s.three_made, s.three_attempted),
            format!("{}/{}", s.free_throws_made, s.free_throws_attempted),
            s.rebounds(),
            s.assists,
            s.steals,
            s.blocks,
            s.turnovers,
        );
    }
    let made: u32 = lines.iter().map(|l| l.stats.field_goals_made()).sum();
    let attempted: u32 = lines.iter().map(|l| l.stats.field_goals_attempted()).sum();
    println!("FG%: {:.1}", pct(made, attempted) * 100.0);
}

fn run_league(config: &SimConfig, seed: u64, out: Option<&Path>) -> Result<()> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let teams = LeagueGenerator::new(config, &DefaultLabels).generate(&mut rng);

    for team in &teams {
        if let Err(reason) = team.validate() {
            bail!(reason);
        }
        let avg = team.averages();
        let best = team.starters(1);
        let star = best.first().map(|p| p.to_string()).unwrap_or_default();
        println!("{:<8} {:>2} players  OVR {:.1}  best: {}", team.name, team.players.len(), avg.overall, star);
    }

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&teams)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("💾 League saved to {}", path.display());
    }
    Ok(())
}

fn run_develop(seed: u64, age: u8, seasons: u32, archetype: Option<Archetype>) -> Result<()> {
    let config = SimConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generator = PlayerGenerator::new(&config.generation, &DefaultLabels);
    let mut player = generator.generate(age, archetype, &mut rng);
    println!("{} [{} from {}]", player, player.archetype, player.country);

    let engine = DevelopmentEngine::new(&config.development);
    let first = config.generation.initial_season + 1;
    for season in 0..seasons {
        engine.develop_season(&mut player, first + season as i32, "Free Agent", &mut rng);
    }

    println!("{:<6} {:>4} {:>4} {:>4} {:<3}", "Season", "Age", "OVR", "POT", "Pos");
    for snap in player.history() {
        println!(
            "{:<6} {:>4} {:>4} {:>4} {:<3}",
            snap.season_year, snap.age, snap.overall, snap.potential, snap.position
        );
    }
    Ok(())
}
