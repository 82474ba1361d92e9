// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the store layer.

use league_core::CoreError;
use thiserror::Error;

/// Store-level errors.
///
/// A lookup that misses is not an error; mutations report it as `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The command failed field validation and was not applied.
    #[error("Mutation rejected: {0}")]
    Rejected(#[from] CoreError),
}
