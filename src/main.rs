use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use dots_ai::session::{ComputerTurn, Session};
use dots_ai::{DEFAULT_SEARCH_DEPTH, MIN_BOARD_SIZE};

mod display;

const DEFAULT_BOARD_SIZE: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = stdin();

    println!("Welcome to Dots and Boxes\n");

    // choose the board size
    let size = loop {
        print!(
            "Dots per side ({} or more, default {}): ",
            MIN_BOARD_SIZE, DEFAULT_BOARD_SIZE
        );
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        let answer = buffer.trim();

        if answer.is_empty() {
            break DEFAULT_BOARD_SIZE;
        }
        match answer.parse::<usize>() {
            Ok(size) if size >= MIN_BOARD_SIZE => break size,
            _ => println!("Invalid size: {}", answer),
        }
    };

    // choose how far ahead the AI looks
    let depth = loop {
        print!(
            "Search depth (1 or more, default {}; large depths take a while): ",
            DEFAULT_SEARCH_DEPTH
        );
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        let answer = buffer.trim();

        if answer.is_empty() {
            break DEFAULT_SEARCH_DEPTH;
        }
        match answer.parse::<usize>() {
            Ok(depth) if depth >= 1 => break depth,
            _ => println!("Invalid depth: {}", answer),
        }
    };

    let mut session = Session::new(size, depth)?;

    println!("\nClaim the edge between two adjacent dots by entering 'row col row col'.");
    println!("Completing a cell scores its value; highest total wins.\n");

    // game loop
    loop {
        let board = session.snapshot();
        display::draw(&board).expect("Failed to draw board!");

        let (human, computer) = board.scores();
        println!("\nHuman: {}    AI: {}\n", human, computer);

        if board.is_over() {
            match human.cmp(&computer) {
                Ordering::Greater => println!("You win!"),
                Ordering::Less => println!("The AI wins!"),
                Ordering::Equal => println!("Draw!"),
            }
            break;
        }

        print!("Move input > ");
        stdout().flush().expect("failed to flush to stdout!");
        let mut input_str = String::new();
        stdin.read_line(&mut input_str)?;

        let (a, b) = match display::parse_move(&input_str, size) {
            Some(edge) => edge,
            None => {
                println!("Invalid move: {}", input_str.trim());
                continue;
            }
        };

        if let Err(err) = session.apply_human_move(a, b) {
            println!("{}", err);
            // try the move again
            continue;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
        spinner.set_message("AI is thinking...");
        spinner.enable_steady_tick(100);

        let report = session.outcomes().recv()?;
        spinner.finish_and_clear();

        match report {
            ComputerTurn::Played { edge, nodes, .. } => {
                println!(
                    "AI connected {} and {} ({} nodes searched)",
                    edge.0, edge.1, nodes
                );
            }
            // the human claimed the final edge; the next lap of the loop
            // announces the result
            ComputerTurn::Exhausted => {}
        }
    }
    Ok(())
}
