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

/// Infinite Fibonacci series `0, 1, 1, 2, 3, 5, ...`.
///
/// Terms are `u128`; the first term that does not fit fails the pull.
#[derive(Clone, Debug)]
pub struct LiuCFibonacci {
    current: Option<u128>,
    upcoming: Option<u128>,
    state: LiuCState,
}

impl LiuCFibonacci {
    #[allow(non_snake_case)]
    pub fn LiuFNew() -> Self {
        Self {
            current: Some(0),
            upcoming: Some(1),
            state: LiuCState::Ready,
        }
    }

    fn advance(&mut self) -> Result<Option<u128>> {
        let value = self
            .current
            .ok_or_else(|| LiuError::stage("source.fibonacci", "term overflowed u128"))?;
        let after = self.upcoming.and_then(|next| value.checked_add(next));
        self.current = self.upcoming;
        self.upcoming = after;
        Ok(Some(value))
    }
}

impl Default for LiuCFibonacci {
    fn default() -> Self {
        Self::LiuFNew()
    }
}

impl LiuCSequence for LiuCFibonacci {
    type Item = u128;

    fn name(&self) -> &'static str {
        "source.fibonacci"
    }

    fn next_item(&mut self) -> Result<Option<u128>> {
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
