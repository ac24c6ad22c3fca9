// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings for the browser.
//!
//! The native build scans parsed HTML (`crate::html`); the WASM build scans the
//! live DOM through the same `TextNodeSource` seam, schedules emphasis restores
//! with `setTimeout`, and scopes its dismissal listeners to the open panel.

#[cfg(feature = "wasm")]
pub mod wasm;
