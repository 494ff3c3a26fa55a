//! REPL Module
//!
//! The interactive loop: read a line, normalise it, dispatch the command,
//! print the result. Session state lives in a [`ReplContext`] that is passed
//! to each handler.

mod commands;
mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::pokedex::{CatchRoll, Pokedex, RandomRoll};

pub use commands::{Command, Flow};
pub use input::clean_input;

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Pokedex > ";

/// Links to the neighbouring pages of the location area listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page `map` will show; `None` past the last page
    pub next: Option<String>,
    /// Page `mapb` will show; `None` on the first page
    pub previous: Option<String>,
}

// == Repl Context ==
/// Everything a command handler may read or change.
pub struct ReplContext {
    pub client: PokeApiClient,
    pub pagination: Pagination,
    pub pokedex: Pokedex,
    roller: Box<dyn CatchRoll>,
}

impl ReplContext {
    /// Creates a fresh session positioned before the first page.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_roller(client, Box::new(RandomRoll))
    }

    /// Creates a session with a specific source of catch rolls.
    pub fn with_roller(client: PokeApiClient, roller: Box<dyn CatchRoll>) -> Self {
        let pagination = Pagination {
            next: Some(client.first_page_url()),
            previous: None,
        };
        Self {
            client,
            pagination,
            pokedex: Pokedex::new(),
            roller,
        }
    }

    pub(crate) fn roll(&mut self) -> u32 {
        self.roller.roll()
    }
}

impl std::fmt::Debug for ReplContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplContext")
            .field("client", &self.client)
            .field("pagination", &self.pagination)
            .field("pokedex", &self.pokedex)
            .finish_non_exhaustive()
    }
}

// == Run ==
/// Runs the loop until `exit` or end of input.
///
/// Command failures are printed and the loop carries on; only failures to
/// read `input` or write `out` end it with an error.
pub async fn run<R, W>(ctx: &mut ReplContext, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "Welcome to the Pokedex!")?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input, leaving the REPL");
            writeln!(out)?;
            break;
        };

        let words = clean_input(&line);
        let Some((first, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::parse(first) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match command.execute(args, ctx, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                debug!(command = command.name(), "Command failed: {}", err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::cache::ResponseCache;
    use crate::models::Pokemon;
    use crate::pokedex::FixedRoll;

    fn offline_context() -> ReplContext {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(30)));
        let client = PokeApiClient::with_base_url(cache, "http://127.0.0.1:9");
        ReplContext::with_roller(client, Box::new(FixedRoll(99)))
    }

    async fn run_script(ctx: &mut ReplContext, script: &str) -> String {
        let mut out = Vec::new();
        run(ctx, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_new_context_starts_on_first_page() {
        let ctx = offline_context();
        assert_eq!(
            ctx.pagination.next.as_deref(),
            Some("http://127.0.0.1:9/location-area/")
        );
        assert!(ctx.pagination.previous.is_none());
    }

    #[tokio::test]
    async fn test_welcome_and_exit() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "exit\nhelp\n").await;

        assert!(output.starts_with("Welcome to the Pokedex!\n"));
        assert!(output.contains("Closing the Pokedex... Goodbye!"));
        // Nothing after exit runs
        assert!(!output.contains("Usage:"));
    }

    #[tokio::test]
    async fn test_blank_and_unknown_lines() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "\n   \nFLY away\n").await;

        assert_eq!(output.matches("Unknown command").count(), 1);
        assert_eq!(output.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "mapb\n").await;
        assert!(output.contains("you are on page one"));
    }

    #[tokio::test]
    async fn test_map_past_last_page() {
        let mut ctx = offline_context();
        ctx.pagination.next = None;
        let output = run_script(&mut ctx, "map\n").await;
        assert!(output
            .contains("you have reached the last page: use mapb to navigate to previous page"));
    }

    #[tokio::test]
    async fn test_network_error_keeps_loop_alive() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "catch pikachu\nhelp\n").await;

        assert!(output.contains("Throwing a Pokeball at pikachu..."));
        assert!(output.contains("Error: failed to fetch"));
        assert!(output.contains("Usage:"));
    }

    #[tokio::test]
    async fn test_inspect_uncaught_and_caught() {
        let mut ctx = offline_context();
        ctx.pokedex.add(
            serde_json::from_str::<Pokemon>(
                r#"{
                    "name": "pidgey", "base_experience": 50, "height": 3, "weight": 18,
                    "stats": [{"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": ""}}],
                    "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}]
                }"#,
            )
            .unwrap(),
        );

        let output = run_script(&mut ctx, "inspect mew\ninspect PIDGEY\n").await;

        assert!(output.contains("you have not caught a mew yet"));
        assert!(output.contains("Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  -hp: 40\nTypes:\n  - normal\n"));
    }

    #[tokio::test]
    async fn test_argument_arity() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "explore\ncatch a b\ninspect\n").await;

        assert!(output.contains("Please supply the area to explore"));
        assert!(output.contains("Please supply only ONE Pokemon to catch at a time"));
        assert!(output.contains("Please supply the Pokemon to inspect"));
    }

    #[tokio::test]
    async fn test_pokedex_and_cache_commands() {
        let mut ctx = offline_context();
        let output = run_script(&mut ctx, "pokedex\ncache\n").await;

        assert!(output.contains("Your Pokedex is empty"));
        assert!(output.contains("Cache entries: 0"));
        assert!(output.contains("TTL: 30s"));
        assert!(output.contains("Last sweep: never"));
    }
}
