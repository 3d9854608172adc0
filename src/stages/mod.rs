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

//! # Stages Module
//!
//! Sequences that derive their items from one or more upstream sequences.
//! Every stage owns its upstream and holds at most a small amount of scalar
//! state (a running index, a partial group, a remaining count).
//!
//! ## Stage Catalogue
//!
//! - **filter**: Predicate filters (`filter`, `try_filter`)
//! - **transform**: One-to-one mappings (`map`, `try_map`)
//! - **batch**: Fixed-size grouping
//! - **enumerate**: Running index
//! - **chain**: Concatenation of several upstreams
//! - **take**: Upper bound on the number of items
//!
//! Each file also carries the factories that build its stage over
//! `serde_json::Value` items for configured pipelines.

pub mod batch;
pub mod chain;
pub mod enumerate;
pub mod filter;
pub mod take;
pub mod transform;

pub use batch::LiuCBatch;
pub use chain::LiuCChain;
pub use enumerate::LiuCEnumerate;
pub use filter::{LiuCFilter, LiuCTryFilter};
pub use take::LiuCTake;
pub use transform::{LiuCMap, LiuCTryMap};
