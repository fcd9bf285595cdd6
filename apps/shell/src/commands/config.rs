//! # Config Commands
//!
//! Configuration and usage retrieval.

use serde::Serialize;
use tracing::debug;

use crate::event::VERBS;
use crate::state::ConfigState;

/// Gets the effective shell configuration.
///
/// ## When Used
/// - Client startup (store name, currency symbol for its own formatting)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// One entry of the `help` listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Usage {
    pub command: &'static str,
    pub description: &'static str,
}

/// Lists every verb the shell accepts.
pub fn get_help() -> Vec<Usage> {
    debug!("get_help command");
    VERBS
        .iter()
        .map(|&(command, description)| Usage {
            command,
            description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_clones() {
        let config = ConfigState::default();
        assert_eq!(get_config(&config), config);
    }

    #[test]
    fn test_get_help() {
        let usage = get_help();
        assert_eq!(usage.len(), VERBS.len());
        assert_eq!(usage[0].command, "view");
    }
}
