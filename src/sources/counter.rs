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

use crate::errors::{LiuError, Result};
use crate::sequence::{LiuCSequence, LiuCState, LiuFTrack};

/// Arithmetic counter.
///
/// Unbounded counters never exhaust; the consumer must bound them. A bounded
/// counter stops before reaching `end`. Overflow fails the pull instead of
/// wrapping around.
#[derive(Clone, Debug)]
pub struct LiuCCounter {
    // None once advancing past the last value overflowed.
    next: Option<i64>,
    step: i64,
    end: Option<i64>,
    state: LiuCState,
}

impl LiuCCounter {
    /// `0, 1, 2, ...`
    #[allow(non_snake_case)]
    pub fn LiuFNew() -> Self {
        Self::LiuFFrom(0, 1)
    }

    /// `start, start + step, start + 2 * step, ...`
    #[allow(non_snake_case)]
    pub fn LiuFFrom(start: i64, step: i64) -> Self {
        Self {
            next: Some(start),
            step,
            end: None,
            state: LiuCState::Ready,
        }
    }

    /// `0, 1, ..., max - 1`
    #[allow(non_snake_case)]
    pub fn LiuFUpTo(max: i64) -> Self {
        Self::LiuFFrom(0, 1).LiuFUntil(max)
    }

    /// Bounds the counter: values at or past `end` are never produced.
    #[allow(non_snake_case)]
    pub fn LiuFUntil(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    fn within_bound(&self, value: i64) -> bool {
        match self.end {
            None => true,
            Some(end) if self.step >= 0 => value < end,
            Some(end) => value > end,
        }
    }

    fn advance(&mut self) -> Result<Option<i64>> {
        let current = match (self.next, self.end) {
            (Some(current), _) => current,
            // Stepping past i64 also steps past any bound.
            (None, Some(_)) => return Ok(None),
            (None, None) => {
                return Err(LiuError::stage("source.counter", "counter overflowed i64"));
            }
        };
        if !self.within_bound(current) {
            return Ok(None);
        }
        self.next = current.checked_add(self.step);
        Ok(Some(current))
    }
}

impl Default for LiuCCounter {
    fn default() -> Self {
        Self::LiuFNew()
    }
}

impl LiuCSequence for LiuCCounter {
    type Item = i64;

    fn name(&self) -> &'static str {
        "source.counter"
    }

    fn next_item(&mut self) -> Result<Option<i64>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = self.advance();
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}
