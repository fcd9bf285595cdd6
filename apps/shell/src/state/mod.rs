//! # State Module
//!
//! State the shell hands to commands.
//!
//! Two separate state types rather than one `AppState`, so each command
//! declares exactly what it touches:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐       │
//! │  │    StorefrontState       │        │      ConfigState         │       │
//! │  │                          │        │                          │       │
//! │  │  Owned by the session    │        │  Loaded once at startup  │       │
//! │  │  loop, lent as &mut to   │        │  Lent as & to every      │       │
//! │  │  mutating commands       │        │  command that formats    │       │
//! │  └──────────────────────────┘        └──────────────────────────┘       │
//! │                                                                         │
//! │  One event is processed at a time, so no locking is involved.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::ConfigState;
pub use decor_core::StorefrontState;
