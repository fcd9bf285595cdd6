//! # DÉCOR Shell Entry Point
//!
//! Reads storefront events from stdin, one per line, and answers each with
//! one JSON line on stdout. See [`decor_shell_lib`] for the protocol.
//!
//! ## Example
//! ```text
//! $ printf 'add 1\nadd 2\ncart\n' | decor-shell
//! {"ok":true,"data":{"productId":1,"quantity":1,"summary":{...}}}
//! {"ok":true,"data":{"productId":2,"quantity":1,"summary":{...}}}
//! {"ok":true,"data":{"lines":[...],"lineCount":2,"total":73400,"totalDisplay":"73 400 ₽"}}
//! ```

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match decor_shell_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Shell terminated: {}", err);
            ExitCode::FAILURE
        }
    }
}
