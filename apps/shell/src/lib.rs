//! # DÉCOR Shell Library
//!
//! Drives a [`StorefrontState`] from a line-oriented event stream.
//!
//! ## Module Organization
//! ```text
//! decor_shell_lib/
//! ├── lib.rs          ◄─── You are here (session loop & logging setup)
//! ├── event.rs        ◄─── Line → Event parsing
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── navigation.rs, catalog.rs, favorites.rs
//! │   └── cart.rs, account.rs, config.rs
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Protocol
//! ```text
//! stdin                                stdout
//! ─────                                ──────
//! add 1            ──► dispatch ──►    {"ok":true,"data":{...}}
//! tab nowhere      ──► parse error ─►  {"ok":false,"error":{"code":"INVALID_ARGUMENT",...}}
//! # comment        ──► (ignored)
//! quit             ──► final summary, session ends
//! ```
//!
//! Lines are processed strictly in order: each one is parsed, applied and
//! answered before the next is read. A line that is not valid UTF-8 gets an
//! `INVALID_ARGUMENT` response like any other malformed line; only a failing
//! reader or writer ends the session early.

pub mod commands;
pub mod error;
pub mod event;
pub mod state;

use std::io;

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use event::Event;
use state::{ConfigState, StorefrontState};

/// One response line.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl From<Result<Value, ApiError>> for Envelope {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Envelope {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Envelope {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// What the loop should do after a line.
#[derive(Debug)]
pub enum Outcome {
    /// Blank line or comment: no response
    Skip,
    /// Write the response and keep reading
    Reply(Envelope),
    /// Write the response and end the session
    Quit(Envelope),
}

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, `RUST_LOG` aware)
/// 2. Load configuration from `DECOR_*` variables
/// 3. Serve events until `quit` or end of input
pub async fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting DÉCOR storefront shell");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let storefront = serve(stdin, &mut stdout, &config).await?;

    info!(
        favorites = storefront.favorite_count(),
        cart_lines = storefront.cart_line_count(),
        cart_total = %storefront.cart_total(),
        "Session ended"
    );
    Ok(())
}

/// Serves one session: reads events from `reader`, writes responses to
/// `writer`, and returns the final storefront state.
pub async fn serve<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &ConfigState,
) -> io::Result<StorefrontState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut storefront = StorefrontState::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(
                line.trim_end_matches(|c: char| c == '\n' || c == '\r'),
                &mut storefront,
                config,
            ),
            Err(err) => {
                warn!(%err, "Rejected input line that is not UTF-8");
                let err = ApiError::invalid_argument(format!("Input line is not valid UTF-8: {err}"));
                Outcome::Reply(Envelope::from(Err::<Value, ApiError>(err)))
            }
        };

        match outcome {
            Outcome::Skip => {}
            Outcome::Reply(envelope) => write_envelope(writer, &envelope, config).await?,
            Outcome::Quit(envelope) => {
                write_envelope(writer, &envelope, config).await?;
                break;
            }
        }
    }

    Ok(storefront)
}

/// Parses and applies a single input line.
pub fn handle_line(line: &str, storefront: &mut StorefrontState, config: &ConfigState) -> Outcome {
    let event = match Event::parse(line) {
        Ok(Some(event)) => event,
        Ok(None) => return Outcome::Skip,
        Err(err) => {
            warn!(line = %line.trim(), code = ?err.code, "Rejected input line");
            return Outcome::Reply(Envelope::from(Err::<Value, ApiError>(err)));
        }
    };

    debug!(?event, "Dispatching event");
    let result = commands::dispatch(event, storefront, config);
    if let Err(err) = &result {
        warn!(?event, code = ?err.code, message = %err.message, "Command failed");
    }

    match event {
        Event::Quit => Outcome::Quit(result.into()),
        _ => Outcome::Reply(result.into()),
    }
}

async fn write_envelope<W>(writer: &mut W, envelope: &Envelope, config: &ConfigState) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let text = if config.pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    }
    .map_err(io::Error::other)?;

    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=decor_shell_lib=trace` - Trace for the shell only
/// - Default: INFO, DEBUG for the `decor` crates
///
/// Logs go to stderr; stdout carries only responses.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,decor=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_core::ProductId;

    async fn session(input: &str) -> (Vec<Value>, StorefrontState) {
        session_bytes(input.as_bytes()).await
    }

    async fn session_bytes(input: &[u8]) -> (Vec<Value>, StorefrontState) {
        let mut output = Vec::new();
        let storefront = serve(input, &mut output, &ConfigState::default())
            .await
            .unwrap();

        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (responses, storefront)
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let script = "\
# shopping for vases
category vase
favorite 5
favorite 1
add 1
add 2
add 2
quantity 1 0
cart
";
        let (responses, storefront) = session(script).await;

        assert_eq!(responses.len(), 8);
        assert!(responses.iter().all(|r| r["ok"] == true));

        let cart = &responses[7]["data"];
        assert_eq!(cart["lineCount"], 1);
        assert_eq!(cart["total"], 97_800);

        let favorite_ids: Vec<u32> = storefront
            .favorite_products()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(favorite_ids, vec![1, 5]);
        assert_eq!(storefront.cart_quantity(ProductId::new(1)), None);
    }

    #[tokio::test]
    async fn test_errors_do_not_end_session() {
        let (responses, storefront) = session("add 99\ntab checkout\nfly\nadd 3\n").await;

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["error"]["code"], "NOT_FOUND");
        assert_eq!(responses[1]["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(responses[2]["error"]["code"], "UNKNOWN_COMMAND");
        assert_eq!(responses[3]["ok"], true);
        assert!(responses[0].get("data").is_none());
        assert_eq!(storefront.cart_line_count(), 1);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (responses, storefront) = session("add 4\nquit\nadd 4\n").await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1]["data"]["cartLineCount"], 1);
        assert_eq!(storefront.cart_quantity(ProductId::new(4)), Some(1));
    }

    #[tokio::test]
    async fn test_end_of_input_ends_session() {
        let (responses, storefront) = session("").await;
        assert!(responses.is_empty());
        assert_eq!(storefront, StorefrontState::new());
    }

    #[tokio::test]
    async fn test_non_utf8_line_does_not_end_session() {
        let (responses, storefront) = session_bytes(b"add 1\n\xff\xfe\nadd 2\ncart\n").await;

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["ok"], true);
        assert_eq!(responses[1]["ok"], false);
        assert_eq!(responses[1]["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(responses[2]["ok"], true);
        assert_eq!(responses[3]["data"]["lineCount"], 2);
        assert_eq!(storefront.cart_line_count(), 2);
    }

    #[tokio::test]
    async fn test_crlf_and_missing_final_newline() {
        let (responses, storefront) = session("add 3\r\nadd 3").await;

        assert_eq!(responses.len(), 2);
        assert!(responses.iter().all(|r| r["ok"] == true));
        assert_eq!(storefront.cart_quantity(ProductId::new(3)), Some(2));
    }

    #[test]
    fn test_handle_line_skips_comments() {
        let mut storefront = StorefrontState::new();
        let outcome = handle_line("   # nothing", &mut storefront, &ConfigState::default());
        assert!(matches!(outcome, Outcome::Skip));
    }
}
