//! Headless runner - drives a world with the autopilot and emits JSON lines.
//!
//! Stands in for the render/input loop of an interactive front end: each
//! iteration steers, ticks, and (optionally) writes the observable state.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::autopilot::Autopilot;
use crate::core::{GameSnapshot, GridWorld};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_MAX_STEPS, DEFAULT_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: usize,
    pub columns: usize,
    /// `None` seeds food placement from OS entropy.
    pub seed: Option<u32>,
    pub max_steps: u32,
    /// Emit a snapshot after every tick, not just the last one.
    pub trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
            max_steps: DEFAULT_MAX_STEPS,
            trace: false,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RunEnd {
    GameOver,
    StepLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub end: RunEnd,
    pub score: u32,
    pub ticks: u32,
    pub length: usize,
}

/// One line of runner output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum OutputLine<'a> {
    Tick { state: &'a GameSnapshot },
    Final {
        summary: &'a RunSummary,
        state: &'a GameSnapshot,
    },
}

pub fn parse_run_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                config.rows = parse_value(args, &mut i, "--rows")?;
            }
            "--cols" => {
                config.columns = parse_value(args, &mut i, "--cols")?;
            }
            "--seed" => {
                config.seed = Some(parse_value(args, &mut i, "--seed")?);
            }
            "--max-steps" => {
                config.max_steps = parse_value(args, &mut i, "--max-steps")?;
            }
            "--trace" => {
                config.trace = true;
            }
            other => {
                return Err(anyhow!("run: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("run: missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("run: invalid {} value: {}", flag, v))
}

/// Build a world from `config` and play it out, writing JSON lines to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    match config.seed {
        Some(seed) => {
            let world = GridWorld::seeded(config.rows, config.columns, seed)
                .context("run: cannot build world")?;
            drive(world, config, out)
        }
        None => {
            let world = GridWorld::new(config.rows, config.columns)
                .context("run: cannot build world")?;
            drive(world, config, out)
        }
    }
}

fn drive<R: Rng, W: Write>(
    mut world: GridWorld<R>,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let pilot = Autopilot::new();
    let mut snap = GameSnapshot::default();

    info!(
        rows = config.rows,
        columns = config.columns,
        seed = ?config.seed,
        "run started"
    );

    let mut end = RunEnd::StepLimit;
    for _ in 0..config.max_steps {
        pilot.steer(&mut world);
        let outcome = world.step();

        if config.trace {
            world.snapshot_into(&mut snap);
            write_line(out, &OutputLine::Tick { state: &snap })?;
        }
        if outcome.is_terminal() {
            end = RunEnd::GameOver;
            break;
        }
    }

    let summary = RunSummary {
        end,
        score: world.score(),
        ticks: world.ticks(),
        length: world.len(),
    };
    world.snapshot_into(&mut snap);
    write_line(
        out,
        &OutputLine::Final {
            summary: &summary,
            state: &snap,
        },
    )?;
    out.flush().context("run: flush failed")?;

    info!(score = summary.score, ticks = summary.ticks, end = ?summary.end, "run finished");
    Ok(summary)
}

fn write_line<W: Write>(out: &mut W, line: &OutputLine<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, line).context("run: serialize failed")?;
    out.write_all(b"\n").context("run: write failed")?;
    Ok(())
}
