// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Domain types shared across the crate.

pub mod holiday;

// Note: Public types are re-exported from lib.rs, not here
