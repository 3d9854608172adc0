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

//! # Sources Module
//!
//! Sequences rooted in something other than another sequence.
//!
//! - **lines**: Lines of a text file or reader, optionally gzip/zstd compressed
//! - **counter**: Arithmetic counters, unbounded or bounded
//! - **fibonacci**: The unbounded Fibonacci series
//! - **iter**: In-memory data and iterators of results
//!
//! ## Reading Lines
//!
//! ```rust
//! use liu::sources::{LiuCLineSource, LiuCLineConfig};
//!
//! let source = LiuCLineSource::LiuFOpenWithConfig(
//!     &path,
//!     &LiuCLineConfig { trim: true, ..Default::default() },
//! )?;
//! ```

pub mod counter;
pub mod fibonacci;
pub mod iter;
pub mod lines;

pub use counter::LiuCCounter;
pub use fibonacci::LiuCFibonacci;
pub use iter::{LiuCIterSource, LiuCResultSource};
pub use lines::{LiuCCompression, LiuCLineConfig, LiuCLineSource};
