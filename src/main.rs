// This file is part of the rulechess library.
// Copyright (C) 2026 The rulechess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::error::Error;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use rulechess::{split_perft, Chess, Role, Square};

#[derive(Parser)]
#[command(name = "rulechess", version, about = "Play and verify standard chess rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count legal move paths from the starting position
    Perft {
        #[arg(short, long, default_value_t = 3)]
        depth: u32,
    },
    /// Play moves given as pairs of squares, e.g. e2 e4 e7 e5
    Play {
        squares: Vec<Square>,

        /// Piece to promote to (n, b, r or q)
        #[arg(short, long, value_parser = parse_promotion)]
        promote: Option<Role>,
    },
}

fn parse_promotion(s: &str) -> Result<Role, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Role::from_char), chars.next()) {
        (Some(role), None) if Role::PROMOTIONS.contains(&role) => Ok(role),
        _ => Err(format!("invalid promotion role: {s}")),
    }
}

fn perft(depth: u32) {
    let pos = Chess::new();
    let mut total = 0;
    for (m, nodes) in split_perft(&pos, depth) {
        println!("{m}: {nodes}");
        total += nodes;
    }
    println!();
    println!("nodes: {total}");
}

fn play(squares: &[Square], promote: Option<Role>) -> Result<(), Box<dyn Error>> {
    if squares.len() % 2 != 0 {
        return Err("expected pairs of squares".into());
    }

    let mut pos = Chess::new();
    println!("{pos}");

    for pair in squares.chunks_exact(2) {
        let m = pos.make_move(pair[0], pair[1], promote)?;
        println!();
        println!("{m}");
        println!("{pos}");
    }

    match pos.outcome() {
        Some(outcome) => println!("{outcome}"),
        None if pos.is_check() => println!("check"),
        None => info!("game in progress"),
    }

    Ok(())
}

fn main() {
    let env = Env::default().filter_or("RULECHESS_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Perft { depth } => perft(depth),
        Commands::Play { squares, promote } => {
            if let Err(err) = play(&squares, promote) {
                error!("{err}");
                std::process::exit(1);
            }
        }
    }
}
