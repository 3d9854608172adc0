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

//! # Liu Metrics Module
//!
//! Pull statistics for individual stages and a scoped timer.
//!
//! [`LiuCMetered`] wraps any sequence and counts what flows through it into a
//! shared [`LiuCMetricsHandle`]; the handle stays readable after the metered
//! sequence has been moved into a downstream stage. [`LiuCTimer`] logs the
//! time spent in a scope when it is dropped, on every exit path.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;

use crate::errors::Result;
use crate::sequence::{LiuCSequence, LiuCState};

#[derive(Clone, Debug, Serialize, Default, PartialEq)]
pub struct LiuCStageMetrics {
    /// Name of the wrapped sequence.
    pub stage: String,
    /// Calls to `next_item`, including terminal ones.
    pub pulls: u64,
    /// Items actually produced.
    pub items: u64,
    pub exhausted: bool,
    pub failures: u64,
}

impl LiuCStageMetrics {
    #[allow(non_snake_case)]
    pub fn LiuFAsJson(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Shared, cloneable view of one stage's metrics.
#[derive(Clone, Debug, Default)]
pub struct LiuCMetricsHandle {
    inner: Arc<Mutex<LiuCStageMetrics>>,
}

impl LiuCMetricsHandle {
    fn lock(&self) -> MutexGuard<'_, LiuCStageMetrics> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[allow(non_snake_case)]
    pub fn LiuFSnapshot(&self) -> LiuCStageMetrics {
        self.lock().clone()
    }
}

/// Sequence wrapper that records pull statistics.
#[derive(Debug)]
pub struct LiuCMetered<S> {
    upstream: S,
    metrics: LiuCMetricsHandle,
}

impl<S: LiuCSequence> LiuCMetered<S> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(upstream: S) -> (Self, LiuCMetricsHandle) {
        let metrics = LiuCMetricsHandle::default();
        metrics.lock().stage = upstream.name().to_string();
        let handle = metrics.clone();
        (Self { upstream, metrics }, handle)
    }
}

impl<S: LiuCSequence> LiuCSequence for LiuCMetered<S> {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        self.upstream.name()
    }

    fn next_item(&mut self) -> Result<Option<S::Item>> {
        let outcome = self.upstream.next_item();
        let mut metrics = self.metrics.lock();
        metrics.pulls += 1;
        match &outcome {
            Ok(Some(_)) => metrics.items += 1,
            Ok(None) => metrics.exhausted = true,
            Err(_) => metrics.failures += 1,
        }
        outcome
    }

    fn state(&self) -> LiuCState {
        self.upstream.state()
    }
}

/// Scoped timer. Logs the elapsed time at info level when dropped.
#[derive(Debug)]
pub struct LiuCTimer {
    label: String,
    started: Instant,
}

impl LiuCTimer {
    #[allow(non_snake_case)]
    pub fn LiuFStart(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for LiuCTimer {
    fn drop(&mut self) {
        log::info!("{} took {:.2?}", self.label, self.started.elapsed());
    }
}
