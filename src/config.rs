//! Command-line configuration and the player entry prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::core::PlayerProfile;
use crate::term::game_view::MAX_CELL_SIZE;
use crate::types::DEFAULT_PLAYER_AGE;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Player name (skips the prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Player age, used with --name
    #[arg(long)]
    pub age: Option<u8>,

    /// RNG seed for piece selection (default: derived from the clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log threshold: off | error | warn | info | debug | trace
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Terminal columns per board cell (1-8)
    #[arg(long, default_value_t = 2)]
    pub cell_width: u16,
}

/// Validated runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u32,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub cell_width: u16,
    pub name: Option<String>,
    pub age: Option<u8>,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let log_level = cli
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("invalid --log-level value: {}", cli.log_level))?;
        if !(1..=MAX_CELL_SIZE).contains(&cli.cell_width) {
            return Err(anyhow!(
                "--cell-width must be between 1 and {}, got {}",
                MAX_CELL_SIZE,
                cli.cell_width
            ));
        }
        if cli.age.is_some() && cli.name.is_none() {
            return Err(anyhow!("--age requires --name"));
        }
        Ok(Self {
            seed: cli.seed.unwrap_or_else(clock_seed),
            log_file: cli.log_file,
            log_level,
            cell_width: cli.cell_width,
            name: cli.name,
            age: cli.age,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Player entry from the command line, or asked for interactively.
pub fn resolve_player(
    settings: &Settings,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PlayerProfile> {
    match &settings.name {
        Some(name) => PlayerProfile::new(name, settings.age).context("invalid --name"),
        None => prompt_player(input, output),
    }
}

/// Ask for a name until a non-blank one is given, then an optional age.
pub fn prompt_player(input: &mut impl BufRead, output: &mut impl Write) -> Result<PlayerProfile> {
    let mut line = String::new();
    let name = loop {
        write!(output, "Player name: ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!("no player name entered"));
        }
        if !line.trim().is_empty() {
            break line.trim().to_string();
        }
    };

    let age = loop {
        write!(output, "Age [{}]: ", DEFAULT_PLAYER_AGE)?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break None;
        }
        let answer = line.trim();
        if answer.is_empty() {
            break None;
        }
        match answer.parse::<u8>() {
            Ok(age) => break Some(age),
            Err(_) => writeln!(output, "Please enter a number between 0 and 255.")?,
        }
    };

    Ok(PlayerProfile::new(&name, age)?)
}
