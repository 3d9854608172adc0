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

use std::collections::VecDeque;

use crate::errors::Result;
use crate::sequence::{LiuCBoxedSequence, LiuCSequence, LiuCState, LiuFTrack};

/// Concatenates several upstream sequences, draining each in turn.
///
/// An upstream is dropped as soon as it reports exhaustion, so a chain of
/// line sources holds at most one open handle at a time.
pub struct LiuCChain<T> {
    upstreams: VecDeque<LiuCBoxedSequence<T>>,
    state: LiuCState,
}

impl<T> LiuCChain<T> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstreams: Vec<LiuCBoxedSequence<T>>) -> Self {
        Self {
            upstreams: upstreams.into(),
            state: LiuCState::Ready,
        }
    }

    /// Appends another upstream after the ones already queued.
    #[allow(non_snake_case)]
    pub fn LiuFPush(&mut self, upstream: LiuCBoxedSequence<T>) {
        self.upstreams.push_back(upstream);
    }

    /// Upstreams not yet exhausted, including the active one.
    pub fn remaining(&self) -> usize {
        self.upstreams.len()
    }

    fn pull(&mut self) -> Result<Option<T>> {
        while let Some(active) = self.upstreams.front_mut() {
            match active.next_item()? {
                Some(item) => return Ok(Some(item)),
                None => {
                    log::debug!("chain: upstream '{}' exhausted", active.name());
                    self.upstreams.pop_front();
                }
            }
        }
        Ok(None)
    }
}

impl<T> LiuCSequence for LiuCChain<T> {
    type Item = T;

    fn name(&self) -> &'static str {
        "chain"
    }

    fn next_item(&mut self) -> Result<Option<T>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = self.pull();
        if outcome.is_err() {
            self.upstreams.clear();
        }
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}
