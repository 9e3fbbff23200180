// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ServerlessNetwork Core
//!
//! The core component of the ServerlessNetwork project.
//! Exposes the network handle and its `run` entry point.

use anyhow::Result;
use tracing::{info, instrument};

/// The ServerlessNetwork handle.
///
/// Construction takes no arguments and always succeeds; the handle carries
/// no state of its own.
#[derive(Debug)]
pub struct ServerlessNetwork;

impl Default for ServerlessNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerlessNetwork {
    /// Initializes a new ServerlessNetwork instance.
    #[instrument]
    pub fn new() -> Self {
        info!("Initializing ServerlessNetwork...");
        Self
    }

    /// Runs the network once and reports whether the pass completed.
    ///
    /// The returned payload is always `true`; the call has no failure modes
    /// and no side effects beyond its log events.
    ///
    /// # Examples
    ///
    /// ```
    /// use serverlessnetwork::ServerlessNetwork;
    ///
    /// let mut network = ServerlessNetwork::new();
    /// assert!(network.run().expect("run failed"));
    /// ```
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<bool> {
        info!("ServerlessNetwork running.");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_always_constructs() {
        let _network: ServerlessNetwork = ServerlessNetwork::new();
    }

    #[test]
    fn run_returns_true_on_fresh_instance() {
        let mut network = ServerlessNetwork::new();
        let ran = network.run().expect("run failed");
        assert!(ran);
    }

    #[test]
    fn default_is_equivalent_to_new() {
        let mut network = ServerlessNetwork::default();
        assert!(network.run().expect("run failed"));
    }
}
