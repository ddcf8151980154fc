//! Terminal front-end.
//!
//! Plays a best-of-N match against the computer on stdin/stdout.
//!
//! Options: --best-of, --rules, --seed, --delay-ms

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rps_engine::*;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Rock-Paper-Scissors against the computer")]
struct Args {
    /// Match length: 3, 5 or 7
    #[arg(long, default_value_t = 3)]
    best_of: u8,

    /// Round rules: classic or favored
    #[arg(long, default_value = "classic")]
    rules: String,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each round, in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,
}

impl Args {
    fn match_config(&self) -> anyhow::Result<MatchConfig> {
        let rules: RuleSet = self.rules.parse()?;
        Ok(MatchConfig::best_of(self.best_of)?.with_rules(rules))
    }
}

fn render(state: &MatchState) {
    println!(
        "{}  you {}  cpu {}  (first to {})",
        format!("Round {}", state.round).bold(),
        state.player_score.to_string().green().bold(),
        state.system_score.to_string().red().bold(),
        state.win_threshold
    );

    if let (true, Some(player_move)) = (state.round_result.is_resolved(), state.last_player_move) {
        let line = format!("you {} / system {}", player_move, state.system_move);
        match state.round_result {
            RoundResult::PlayerWin => println!("{} -> {}", line, "you chose correctly!".green()),
            RoundResult::SystemWin => println!("{} -> {}", line, "you chose poorly!".red()),
            RoundResult::Draw => println!("{} -> {}", line, "draw".yellow()),
            RoundResult::None => {}
        }
    }

    match state.match_result {
        MatchResult::PlayerWonMatch => println!("{}", "You won the match!".green().bold()),
        MatchResult::SystemWonMatch => println!("{}", "The system won!".red().bold()),
        MatchResult::InProgress => {}
    }
}

fn banner(config: &MatchConfig) -> String {
    let draws = if config.rules.allows_draws() { "draws allowed" } else { "no draws" };
    format!("{} ({} rules, {})", config.length, config.rules, draws)
}

/// Config for `reset` or `reset N`: keeps the rules, optionally switches length.
fn reset_config(current: MatchConfig, best_of: Option<&str>) -> anyhow::Result<MatchConfig> {
    match best_of {
        None => Ok(current),
        Some(n) => {
            let n: u8 = n.parse().with_context(|| format!("invalid match length {:?}", n))?;
            Ok(MatchConfig::best_of(n)?.with_rules(current.rules))
        }
    }
}

fn prompt(state: &MatchState) -> anyhow::Result<()> {
    if state.is_decided() {
        print!("[reset [3|5|7] | quit] > ");
    } else {
        print!("[rock | paper | scissors | reset [3|5|7] | quit] > ");
    }
    std::io::stdout().flush().context("flush stdout")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.match_config()?;
    let engine = match args.seed {
        Some(seed) => MatchEngine::new(config, seed),
        None => MatchEngine::from_entropy(config),
    };
    let timing = SessionConfig::default().with_advance_delay(Duration::from_millis(args.delay_ms));
    let mut session = MatchSession::new(engine, timing);

    println!("{}", banner(&config).bold());
    prompt(session.state())?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            cmd if cmd.split_whitespace().next() == Some("reset") => {
                match reset_config(*session.engine().config(), cmd.split_whitespace().nth(1)) {
                    Err(e) => eprintln!("{:#}", e),
                    Ok(next) => {
                        let state = session.reset(next);
                        println!("{}", format!("New match: {}", banner(&next)).bold());
                        render(&state);
                    }
                }
            }
            input => match input.parse::<Move>() {
                Err(e) => eprintln!("{}", e),
                Ok(player_move) => match session.play(player_move, Instant::now()) {
                    Err(e) if e.is_invalid_state() => {
                        eprintln!("{}", "the match is over; type reset to play again".yellow())
                    }
                    Err(e) => return Err(e.into()),
                    Ok(state) => {
                        render(&state);
                        if let Some(pending) = session.pending() {
                            std::thread::sleep(pending.due_at.saturating_duration_since(Instant::now()));
                            if let TickOutcome::Advanced(next) = session.tick(Instant::now())? {
                                log::debug!("round {} ready", next.round);
                            }
                        }
                    }
                },
            },
        }
        prompt(session.state())?;
    }

    Ok(())
}
