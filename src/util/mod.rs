// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the text primitives, live search and catalog.
//!
//! Everything counts characters, not bytes: the thresholds (10, 300, 100) and
//! snippet windows are all defined in characters.

pub mod normalize;
