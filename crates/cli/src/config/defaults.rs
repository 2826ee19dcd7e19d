// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants via their `default_*` methods.

/// Compute command defaults.
pub mod compute {
    /// Simulated run duration (180 seconds).
    pub const DELAY_SECS: u64 = 180;

    /// Reported performance score.
    pub const PERFORMANCE: f64 = 3.0;

    /// Record file name, written to the working directory.
    pub const OUTPUT: &str = "performance_result.json";
}

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "perfbench.toml";
