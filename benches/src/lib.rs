// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmark-only crate; see the `benches/` directory for the harnesses.
