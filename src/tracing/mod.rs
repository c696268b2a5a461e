// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Observability and tracing utilities.
//!
//! Client operations log through `tracing` with structured fields and run
//! inside spans named `hudy.<operation>`. Install any subscriber to see them.

pub(crate) mod spans;

// Span helpers stay crate-internal; callers only see the emitted spans.
