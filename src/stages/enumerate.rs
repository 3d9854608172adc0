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

/// Pairs every upstream item with a running index.
#[derive(Debug)]
pub struct LiuCEnumerate<S> {
    upstream: S,
    // None once the index has passed usize::MAX.
    next_index: Option<usize>,
    state: LiuCState,
}

impl<S> LiuCEnumerate<S> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, start: usize) -> Self {
        Self {
            upstream,
            next_index: Some(start),
            state: LiuCState::Ready,
        }
    }
}

impl<S: LiuCSequence> LiuCSequence for LiuCEnumerate<S> {
    type Item = (usize, S::Item);

    fn name(&self) -> &'static str {
        "enumerate"
    }

    fn next_item(&mut self) -> Result<Option<(usize, S::Item)>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = match self.upstream.next_item() {
            Ok(Some(item)) => match self.next_index {
                Some(index) => {
                    self.next_index = index.checked_add(1);
                    Ok(Some((index, item)))
                }
                None => Err(LiuError::stage(self.name(), "index overflow")),
            },
            other => other.map(|_| None),
        };
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// `transform.number`: renders each item as `"{index}: {item}"`, numbering
/// from `start` (default 1). String items are rendered without quotes.
#[allow(non_snake_case)]
pub fn LiuFTransformNumberFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let start = match config.get("start") {
        None | Some(Value::Null) => 1,
        Some(value) => value
            .as_u64()
            .and_then(|start| usize::try_from(start).ok())
            .ok_or_else(|| LiuError::validation("transform.number 'start' must be unsigned integer"))?,
    };
    Ok(upstream
        .enumerate_from(start)
        .map(|(index, item)| match item {
            Value::String(text) => Value::String(format!("{index}: {text}")),
            other => Value::String(format!("{index}: {other}")),
        })
        .boxed())
}
