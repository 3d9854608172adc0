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

/// Maps each upstream item to exactly one downstream item.
pub struct LiuCMap<S, F> {
    upstream: S,
    mapper: F,
    state: LiuCState,
}

impl<S, F> LiuCMap<S, F> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, mapper: F) -> Self {
        Self {
            upstream,
            mapper,
            state: LiuCState::Ready,
        }
    }
}

impl<S, F, U> LiuCSequence for LiuCMap<S, F>
where
    S: LiuCSequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn name(&self) -> &'static str {
        "map"
    }

    fn next_item(&mut self) -> Result<Option<U>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = self.upstream.next_item().map(|item| item.map(&mut self.mapper));
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// Map whose function may fail. A failed mapping fails the pull and leaves
/// the stage in [`LiuCState::Failed`].
pub struct LiuCTryMap<S, F> {
    upstream: S,
    mapper: F,
    state: LiuCState,
}

impl<S, F> LiuCTryMap<S, F> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, mapper: F) -> Self {
        Self {
            upstream,
            mapper,
            state: LiuCState::Ready,
        }
    }
}

impl<S, F, U> LiuCSequence for LiuCTryMap<S, F>
where
    S: LiuCSequence,
    F: FnMut(S::Item) -> Result<U>,
{
    type Item = U;

    fn name(&self) -> &'static str {
        "map"
    }

    fn next_item(&mut self) -> Result<Option<U>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = match self.upstream.next_item() {
            Ok(Some(item)) => (self.mapper)(item).map(Some),
            other => other.map(|_| None),
        };
        if let Err(err) = &outcome {
            log::warn!("map stage failed: {}", err);
        }
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

fn map_text(
    upstream: LiuCBoxedSequence<Value>,
    stage: &'static str,
    op: fn(&str) -> String,
) -> LiuCBoxedSequence<Value> {
    upstream
        .try_map(move |item: Value| match item {
            Value::String(text) => Ok(Value::String(op(&text))),
            other => Err(LiuError::stage(stage, format!("expected string, got {other}"))),
        })
        .boxed()
}

/// `transform.trim`: strips surrounding whitespace from string items.
#[allow(non_snake_case)]
pub fn LiuFTransformTrimFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(map_text(upstream, "transform.trim", |s| s.trim().to_string()))
}

/// `transform.lowercase`
#[allow(non_snake_case)]
pub fn LiuFTransformLowercaseFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(map_text(upstream, "transform.lowercase", str::to_lowercase))
}

/// `transform.uppercase`
#[allow(non_snake_case)]
pub fn LiuFTransformUppercaseFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(map_text(upstream, "transform.uppercase", str::to_uppercase))
}

/// `transform.square`: squares integer items; overflow and non-integers fail
/// the pull.
#[allow(non_snake_case)]
pub fn LiuFTransformSquareFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(upstream
        .try_map(|item: Value| {
            let n = item.as_i64().ok_or_else(|| {
                LiuError::stage("transform.square", format!("expected integer, got {item}"))
            })?;
            n.checked_mul(n)
                .map(Value::from)
                .ok_or_else(|| LiuError::stage("transform.square", format!("{n} squared overflows")))
        })
        .boxed())
}
