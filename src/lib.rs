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

//! # Liu Core Library
//!
//! Liu builds lazy, pull-based sequence pipelines. A source produces items on
//! demand, stages derive items from their upstream one pull at a time, and a
//! consumer decides how far the pipeline runs.
//!
//! ## Module Overview
//!
//! - **sequence**: The pull contract, lifecycle states and combinators
//! - **sources**: Line, counter, Fibonacci and in-memory sources
//! - **stages**: Filter, transform, batch, enumerate, chain and take stages
//! - **consumer**: Drain/take/fold drivers and the push accumulator
//! - **pipeline**: Pipelines built from configuration through named factories
//! - **config**: JSON/YAML pipeline descriptions
//! - **metrics**: Per-stage pull statistics and a scoped timer
//!
//! ## Feature Flags
//!
//! - `compression`: gzip and zstd input for line sources
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use liu::{LiuCSequenceExt, LiuCLineSource, LiuFDrain};
//!
//! let numbered = LiuCLineSource::LiuFOpen("data.txt")?
//!     .filter(|line| !line.is_empty())
//!     .enumerate_from(1)
//!     .map(|(index, line)| format!("{index}: {line}"));
//!
//! for line in LiuFDrain(numbered)? {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every pull returns `Result<Option<T>, LiuError>`: `Ok(None)` is
//! exhaustion, `Err` is a failure. Logging goes through the `log` facade;
//! Liu never installs a logger itself.

#![allow(non_snake_case)]

pub mod config;
pub mod consumer;
pub mod errors;
pub mod metrics;
pub mod pipeline;
pub mod sequence;
pub mod sources;
pub mod stages;

pub use errors::{LiuError, Result};
pub use sequence::{LiuCBoxedSequence, LiuCIter, LiuCSequence, LiuCSequenceExt, LiuCState};
pub use sources::{
    LiuCCompression, LiuCCounter, LiuCFibonacci, LiuCIterSource, LiuCLineConfig, LiuCLineSource,
    LiuCResultSource,
};
pub use stages::{LiuCBatch, LiuCChain, LiuCEnumerate, LiuCFilter, LiuCMap, LiuCTake, LiuCTryFilter, LiuCTryMap};
pub use consumer::{LiuCAccumulator, LiuFDrain, LiuFFold, LiuFForEach, LiuFPullUntil, LiuFTake};
pub use pipeline::{LiuCPipeline, LiuCPipelineBuilder, LiuCStageFactory};
pub use config::{LiuCPipelineConfig, LiuCSourceConfig, LiuCStageConfig};
pub use metrics::{LiuCMetered, LiuCMetricsHandle, LiuCStageMetrics, LiuCTimer};
