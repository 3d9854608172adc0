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

use serde_json::Value;

use crate::errors::{LiuError, Result};
use crate::sequence::{LiuCBoxedSequence, LiuCSequence, LiuCSequenceExt, LiuCState, LiuFTrack};

/// Yields at most `count` upstream items.
///
/// Once the bound is reached the stage reports exhaustion without touching
/// upstream again, which is how infinite sources are bounded.
#[derive(Debug)]
pub struct LiuCTake<S> {
    upstream: S,
    remaining: usize,
    state: LiuCState,
}

impl<S> LiuCTake<S> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, count: usize) -> Self {
        Self {
            upstream,
            remaining: count,
            state: LiuCState::Ready,
        }
    }

    /// Borrows the upstream, e.g. to inspect a source that was left running.
    #[allow(non_snake_case)]
    pub fn LiuFUpstream(&self) -> &S {
        &self.upstream
    }
}

impl<S: LiuCSequence> LiuCSequence for LiuCTake<S> {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "take"
    }

    fn next_item(&mut self) -> Result<Option<S::Item>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = if self.remaining == 0 {
            Ok(None)
        } else {
            let pulled = self.upstream.next_item();
            if let Ok(Some(_)) = pulled {
                self.remaining -= 1;
            }
            pulled
        };
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// `limit`: keeps the first `count` items.
#[allow(non_snake_case)]
pub fn LiuFLimitFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let count = config
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| LiuError::validation("limit requires unsigned integer 'count'"))?;
    let count = usize::try_from(count)
        .map_err(|_| LiuError::validation(format!("limit count {count} exceeds usize")))?;

    Ok(upstream.take(count).boxed())
}
