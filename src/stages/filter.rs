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

use regex::Regex;
use serde_json::Value;

use crate::errors::{LiuError, Result};
use crate::sequence::{LiuCBoxedSequence, LiuCSequence, LiuCSequenceExt, LiuCState, LiuFTrack};

/// Keeps upstream items for which the predicate holds.
///
/// A pull keeps pulling upstream until an item passes or upstream exhausts.
/// Nothing is scanned ahead of the caller.
pub struct LiuCFilter<S, P> {
    upstream: S,
    predicate: P,
    state: LiuCState,
}

impl<S, P> LiuCFilter<S, P> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            state: LiuCState::Ready,
        }
    }
}

impl<S, P> LiuCSequence for LiuCFilter<S, P>
where
    S: LiuCSequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn next_item(&mut self) -> Result<Option<S::Item>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = loop {
            match self.upstream.next_item() {
                Ok(Some(item)) if (self.predicate)(&item) => break Ok(Some(item)),
                Ok(Some(_)) => continue,
                other => break other,
            }
        };
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// Filter whose predicate may fail; the failure is surfaced on the pull that
/// evaluated it.
pub struct LiuCTryFilter<S, P> {
    upstream: S,
    predicate: P,
    state: LiuCState,
}

impl<S, P> LiuCTryFilter<S, P> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            state: LiuCState::Ready,
        }
    }
}

impl<S, P> LiuCSequence for LiuCTryFilter<S, P>
where
    S: LiuCSequence,
    P: FnMut(&S::Item) -> Result<bool>,
{
    type Item = S::Item;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn next_item(&mut self) -> Result<Option<S::Item>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = loop {
            match self.upstream.next_item() {
                Ok(Some(item)) => match (self.predicate)(&item) {
                    Ok(true) => break Ok(Some(item)),
                    Ok(false) => continue,
                    Err(err) => {
                        log::warn!("filter predicate failed: {}", err);
                        break Err(err);
                    }
                },
                other => break other,
            }
        };
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

fn text_option<'a>(config: &'a Value, stage: &str, key: &str) -> Result<&'a str> {
    config
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| LiuError::validation(format!("{stage} requires string '{key}'")))
}

/// `filter.non_empty`: drops empty strings, empty arrays and nulls.
#[allow(non_snake_case)]
pub fn LiuFFilterNonEmptyFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(upstream
        .filter(|item: &Value| match item {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
        .boxed())
}

/// `filter.contains`: keeps strings containing `contains`.
#[allow(non_snake_case)]
pub fn LiuFFilterContainsFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let needle = text_option(config, "filter.contains", "contains")?.to_string();
    Ok(upstream
        .filter(move |item: &Value| item.as_str().is_some_and(|text| text.contains(needle.as_str())))
        .boxed())
}

/// `filter.starts_with`: keeps strings beginning with `prefix`.
#[allow(non_snake_case)]
pub fn LiuFFilterStartsWithFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let prefix = text_option(config, "filter.starts_with", "prefix")?.to_string();
    Ok(upstream
        .filter(move |item: &Value| item.as_str().is_some_and(|text| text.starts_with(prefix.as_str())))
        .boxed())
}

/// `filter.regex`: keeps strings matching `pattern`. The pattern is compiled
/// once, at build time.
#[allow(non_snake_case)]
pub fn LiuFFilterRegexFactory(
    upstream: LiuCBoxedSequence<Value>,
    config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    let pattern = Regex::new(text_option(config, "filter.regex", "pattern")?)?;
    Ok(upstream
        .filter(move |item: &Value| item.as_str().is_some_and(|text| pattern.is_match(text)))
        .boxed())
}

/// `filter.even`: keeps even integers. Anything that is not an integer fails
/// the pull.
#[allow(non_snake_case)]
pub fn LiuFFilterEvenFactory(
    upstream: LiuCBoxedSequence<Value>,
    _config: &Value,
) -> Result<LiuCBoxedSequence<Value>> {
    Ok(upstream
        .try_filter(|item: &Value| {
            if let Some(n) = item.as_u64() {
                Ok(n % 2 == 0)
            } else if let Some(n) = item.as_i64() {
                Ok(n % 2 == 0)
            } else {
                Err(LiuError::stage("filter.even", format!("expected integer, got {item}")))
            }
        })
        .boxed())
}
