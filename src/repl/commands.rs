//! REPL commands
//!
//! The command table and one handler per command. Handlers receive the
//! session context explicitly and write everything they print to `out`.

use std::io::Write;

use tracing::debug;

use super::ReplContext;
use crate::error::Result;
use crate::pokedex::{attempt_catch, catch_difficulty};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Cache,
    ];

    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == word)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Cache => "cache",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the next 20 location areas",
            Command::MapBack => "Display the previous 20 location areas",
            Command::Explore => "List the Pokemon found in an area, usage: explore <area>",
            Command::Catch => "Try to catch a Pokemon, usage: catch <pokemon>",
            Command::Inspect => "Show the stats of a caught Pokemon, usage: inspect <pokemon>",
            Command::Pokedex => "List every Pokemon you have caught",
            Command::Cache => "Show response cache statistics",
        }
    }

    // == Execute ==
    /// Runs the command with its (already normalised) arguments.
    pub async fn execute<W: Write>(
        self,
        args: &[String],
        ctx: &mut ReplContext,
        out: &mut W,
    ) -> Result<Flow> {
        debug!(command = self.name(), ?args, "executing");
        match self {
            Command::Help => help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => map_next(ctx, out).await?,
            Command::MapBack => map_back(ctx, out).await?,
            Command::Explore => {
                if let Some(area) = single_arg(args, "area to explore", out)? {
                    explore(area, ctx, out).await?;
                }
            }
            Command::Catch => {
                if let Some(name) = single_arg(args, "Pokemon to catch", out)? {
                    catch(name, ctx, out).await?;
                }
            }
            Command::Inspect => {
                if let Some(name) = single_arg(args, "Pokemon to inspect", out)? {
                    inspect(name, ctx, out)?;
                }
            }
            Command::Pokedex => list_pokedex(ctx, out)?,
            Command::Cache => cache_stats(ctx, out).await?,
        }
        Ok(Flow::Continue)
    }
}

/// Returns the only argument, or prints usage and returns `None`.
fn single_arg<'a, W: Write>(
    args: &'a [String],
    what: &str,
    out: &mut W,
) -> Result<Option<&'a str>> {
    match args {
        [arg] => Ok(Some(arg.as_str())),
        [] => {
            writeln!(out, "Please supply the {}", what)?;
            Ok(None)
        }
        _ => {
            writeln!(out, "Please supply only ONE {} at a time", what)?;
            Ok(None)
        }
    }
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Usage:")?;
    for cmd in Command::ALL {
        writeln!(out, "{}: {}", cmd.name(), cmd.description())?;
    }
    Ok(())
}

// == Map ==

async fn map_next<W: Write>(ctx: &mut ReplContext, out: &mut W) -> Result<()> {
    let Some(url) = ctx.pagination.next.clone() else {
        writeln!(
            out,
            "you have reached the last page: use mapb to navigate to previous page"
        )?;
        return Ok(());
    };
    show_page(&url, ctx, out).await
}

async fn map_back<W: Write>(ctx: &mut ReplContext, out: &mut W) -> Result<()> {
    let Some(url) = ctx.pagination.previous.clone() else {
        writeln!(out, "you are on page one")?;
        return Ok(());
    };
    show_page(&url, ctx, out).await
}

async fn show_page<W: Write>(url: &str, ctx: &mut ReplContext, out: &mut W) -> Result<()> {
    let page = ctx.client.location_areas(url).await?;

    ctx.pagination.next = page.next;
    ctx.pagination.previous = page.previous;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

// == Explore ==

async fn explore<W: Write>(area: &str, ctx: &mut ReplContext, out: &mut W) -> Result<()> {
    writeln!(out, "Exploring {}...", area)?;
    let detail = ctx.client.location_area(area).await?;

    writeln!(out, "Found Pokemon:")?;
    for name in detail.pokemon_names() {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}

// == Catch ==

async fn catch<W: Write>(name: &str, ctx: &mut ReplContext, out: &mut W) -> Result<()> {
    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = ctx.client.pokemon(name).await?;

    let roll = ctx.roll();
    let difficulty = catch_difficulty(pokemon.base_experience);
    if attempt_catch(roll, pokemon.base_experience) {
        if ctx.pokedex.add(pokemon) {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        } else {
            writeln!(out, "{} is already in your Pokedex", name)?;
        }
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    writeln!(out, "Roll: {}, difficulty: {}", roll, difficulty)?;
    Ok(())
}

// == Inspect ==

fn inspect<W: Write>(name: &str, ctx: &ReplContext, out: &mut W) -> Result<()> {
    let Some(pokemon) = ctx.pokedex.get(name) else {
        writeln!(out, "you have not caught a {} yet", name)?;
        return Ok(());
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for ty in &pokemon.types {
        writeln!(out, "  - {}", ty.type_.name)?;
    }
    Ok(())
}

fn list_pokedex<W: Write>(ctx: &ReplContext, out: &mut W) -> Result<()> {
    if ctx.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty. Go catch something!")?;
        return Ok(());
    }
    writeln!(out, "Your Pokedex:")?;
    for name in ctx.pokedex.names() {
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}

async fn cache_stats<W: Write>(ctx: &ReplContext, out: &mut W) -> Result<()> {
    let cache = ctx.client.cache();
    let stats = cache.stats().await;

    writeln!(out, "Cache entries: {}", stats.total_entries)?;
    writeln!(out, "TTL: {:?}", cache.ttl())?;
    writeln!(
        out,
        "Hits: {}, misses: {} (hit rate {:.1}%)",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    )?;
    writeln!(out, "Inserts: {}, expired: {}", stats.inserts, stats.expired)?;
    match stats.last_sweep_at {
        Some(at) => writeln!(out, "Last sweep: {}", at.to_rfc3339())?,
        None => writeln!(out, "Last sweep: never")?,
    }
    Ok(())
}
