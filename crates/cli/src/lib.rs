// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! perfbench library.
//!
//! `compute` produces a [`record::ResultRecord`] on disk; `evaluate` compares
//! two of them and decides pass/fail.

pub mod cli;
pub mod color;
pub mod compute;
pub mod config;
pub mod discovery;
pub mod error;
pub mod evaluate;
pub mod record;
pub mod revision;
