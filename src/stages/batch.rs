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

/// Groups upstream items into ordered vectors of a fixed size.
///
/// Every group holds `size` items except possibly the last, which holds the
/// partial tail left when upstream exhausts. An empty upstream produces no
/// group at all. At most `size` items are buffered at any time.
#[derive(Debug)]
pub struct LiuCBatch<S: LiuCSequence> {
    upstream: S,
    size: usize,
    state: LiuCState,
}

impl<S: LiuCSequence> LiuCBatch<S> {
    /// Builds the stage, rejecting a zero size before anything is pulled.
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LiuError::validation("batch size must be at least 1"));
        }
        Ok(Self {
            upstream,
            size,
            state: LiuCState::Ready,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn fill(&mut self) -> Result<Option<Vec<S::Item>>> {
        let mut group = Vec::with_capacity(self.size.min(1024));
        while group.len() < self.size {
            match self.upstream.next_item()? {
                Some(item) => group.push(item),
                None => break,
            }
        }
        if group.is_empty() {
            Ok(None)
        } else {
            Ok(Some(group))
        }
    }
}

impl<S: LiuCSequence> LiuCSequence for LiuCBatch<S> {
    type Item = Vec<S::Item>;

    fn name(&self) -> &'static str {
        "batch"
    }

    fn next_item(&mut self) -> Result<Option<Vec<S::Item>>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        // A short group means upstream is already exhausted; the next pull
        // sees that again and reports exhaustion without emitting a group.
        let outcome = self.fill();
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// `batch`: groups items into JSON arrays of `size` (default 1).
#[allow(non_snake_case)]
pub fn LiuFBatchFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let size = match config.get("size") {
        None | Some(Value::Null) => 1,
        Some(value) => value
            .as_i64()
            .ok_or_else(|| LiuError::validation("batch requires integer 'size'"))?,
    };
    if size < 1 {
        return Err(LiuError::validation(format!(
            "batch size must be at least 1, got {size}"
        )));
    }
    let size = usize::try_from(size)
        .map_err(|_| LiuError::validation(format!("batch size {size} exceeds usize")))?;
    Ok(LiuCBatch::LiuFNew(upstream, size)?
        .map(Value::Array)
        .boxed())
}
