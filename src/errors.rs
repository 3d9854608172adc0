//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Liu.
//! The Liu project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Liu Error Module
//!
//! This module defines the error types used throughout Liu for consistent
//! error handling and reporting.
//!
//! ## Failure vs. Exhaustion
//!
//! A pull returns `Result<Option<T>>`. Exhaustion is `Ok(None)` and is never
//! represented by a `LiuError`; every variant below is a real failure.
//!
//! ## Error Categories
//!
//! - **Io**: Failures of the resource a source reads from
//! - **Validation**: Invalid parameters caught at construction time
//! - **Stage**: Predicate, mapping or arithmetic failures inside a stage
//! - **Pipeline**: Misuse of a sequence, e.g. pulling after a failure
//! - **Serde**: Configuration parse errors
//! - **Internal**: Unexpected internal failures
//!
//! ## Usage
//!
//! ```rust
//! use liu::errors::{Result, LiuError};
//!
//! fn batch_size(raw: i64) -> Result<usize> {
//!     if raw < 1 {
//!         return Err(LiuError::validation("batch size must be >= 1"));
//!     }
//!     Ok(raw as usize)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Liu.
pub type Result<T> = std::result::Result<T, LiuError>;

/// Canonical error enumeration for Liu.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum LiuError {
    /// Errors originating from the resource backing a source.
    #[error("io error: {0}")]
    Io(String),

    /// Validation errors triggered by invalid parameters or configuration.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised while a stage computes an item.
    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    /// Failures that come from driving a sequence incorrectly.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// Wrapper for serde-style deserialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for LiuError {
    fn from(err: io::Error) -> Self {
        LiuError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LiuError {
    fn from(err: serde_json::Error) -> Self {
        LiuError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for LiuError {
    fn from(err: serde_yaml::Error) -> Self {
        LiuError::Serde(err.to_string())
    }
}

impl From<regex::Error> for LiuError {
    fn from(err: regex::Error) -> Self {
        LiuError::validation(format!("invalid pattern: {err}"))
    }
}

impl LiuError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        LiuError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct stage errors.
    pub fn stage(name: impl Into<String>, message: impl Into<String>) -> Self {
        LiuError::Stage {
            stage: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        LiuError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        LiuError::Internal(message.into())
    }

    /// True for errors caused by the backing resource rather than the
    /// pipeline's own logic.
    pub fn is_io(&self) -> bool {
        matches!(self, LiuError::Io(_))
    }
}
