// SPDX-FileCopyrightText: 2025 Leo <calprov@leo.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the calprov-core crate.
//!
//! These tests drive the manager over an on-disk database, across reopened
//! connections and configuration defaults.

mod calendar_accounts;
mod config_driven;
mod event_lifecycle;
