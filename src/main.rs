use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufRead, Write};

use dog_game::display::render;
use dog_game::{DogError, GameBuilder, GameRng, TurnState};

const MIN_SIZE: usize = 3;
const MAX_SIZE: usize = 15;

const DEFAULT_NAMES: &[&str] = &[
    "Rex", "Fido", "Laika", "Bella", "Max", "Luna", "Biscuit", "Pepper", "Scout", "Ziggy",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Dog: two players, one shrinking board", long_about = None)]
struct Args {
    /// Board side length (prompted for if omitted)
    #[arg(long, value_parser = clap::value_parser!(u16).range((MIN_SIZE as i64)..=(MAX_SIZE as i64)))]
    size: Option<u16>,

    /// Name of the first player (prompted for if omitted)
    #[arg(long)]
    player1: Option<String>,

    /// Name of the second player (prompted for if omitted)
    #[arg(long)]
    player2: Option<String>,

    /// Seed for the coin flip and default names
    #[arg(long)]
    seed: Option<u64>,

    /// List the legal moves before each prompt
    #[arg(long)]
    hints: bool,
}

/// Print `message` and read one trimmed line. Fails on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// A random default name, avoiding `taken`.
fn random_name(rng: &mut GameRng, taken: Option<&str>) -> String {
    let candidates: Vec<&str> = DEFAULT_NAMES
        .iter()
        .copied()
        .filter(|name| Some(*name) != taken)
        .collect();
    rng.choose(&candidates).copied().unwrap_or("Dog").to_string()
}

fn clean_name(raw: &str, rng: &mut GameRng, taken: Option<&str>) -> String {
    let name = raw.trim();
    if name.is_empty() || Some(name) == taken {
        random_name(rng, taken)
    } else {
        name.to_string()
    }
}

fn ask_size(input: &mut impl BufRead) -> Result<usize> {
    loop {
        let answer = prompt(
            &mut *input,
            &format!("Enter board size, between {} and {}: ", MIN_SIZE, MAX_SIZE),
        )?;
        match answer.parse::<usize>() {
            Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&size) => return Ok(size),
            _ => println!("Board size must be an integer between {} and {}!", MIN_SIZE, MAX_SIZE),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    debug!("driver rng seed {}", rng.seed());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("~~~~ DOG ~~~~");

    let first_raw = match args.player1 {
        Some(name) => name,
        None => prompt(&mut input, "Player 1, enter your name: ")?,
    };
    let first = clean_name(&first_raw, &mut rng, None);

    let second_raw = match args.player2 {
        Some(name) => name,
        None => prompt(&mut input, "Player 2, enter your name: ")?,
    };
    let second = clean_name(&second_raw, &mut rng, Some(&first));

    let size = match args.size {
        Some(size) => usize::from(size),
        None => ask_size(&mut input)?,
    };

    let mut game = GameBuilder::new()
        .size(size)
        .player_names(first, second)
        .seed(rng.seed())
        .build()?;
    info!("game seed {}", game.seed());

    if let Some(player) = game.current_player() {
        println!("Flipping a fair coin... {} moves first.", game.player(player).name());
    }

    loop {
        let player = match game.state() {
            TurnState::AwaitingMove(player) => player,
            TurnState::GameOver(outcome) => {
                println!("{}", render(&game));
                let loser = game.player(outcome.loser).name();
                println!("{}", "!".repeat(10));
                println!("{} has no legal moves!", loser);
                println!("{} blacked out!", loser);
                println!(
                    "{} wins after {} moves!",
                    game.player(outcome.winner).name(),
                    game.history().len()
                );
                return Ok(());
            }
        };

        println!("\n{}", "-".repeat(32));
        println!("{}", render(&game));
        if args.hints {
            let names: Vec<&str> = game.legal_moves().into_iter().map(|(name, _)| name).collect();
            println!("Legal moves: {}", names.join(" "));
        }

        let message = format!("{}, enter your move: ", game.player(player).name());
        let token = prompt(&mut input, &message)?;
        match game.play_movestring(&token) {
            Ok(record) => debug!("played {}", record),
            Err(DogError::InvalidMovestring(_)) => println!("Invalid input!"),
            Err(DogError::IllegalMove { .. }) => println!("That's not a legal move!"),
            Err(err) if err.is_recoverable() => println!("{}", err),
            Err(err) => return Err(err).context("the game engine reached an inconsistent state"),
        }
    }
}
