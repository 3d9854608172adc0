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

//! # Liu Sequence Module
//!
//! This module defines the pull contract every source and stage implements,
//! the shared `{Ready, Exhausted, Failed}` state machine, and the combinator
//! extension trait used to compose pipelines.
//!
//! ## Pull Contract
//!
//! A sequence exposes a single operation, [`LiuCSequence::next_item`]:
//!
//! - `Ok(Some(item))`: the next item
//! - `Ok(None)`: exhaustion, a normal terminal signal
//! - `Err(LiuError)`: a failure, distinct from exhaustion
//!
//! Sequences are explicit state machines. Nothing is computed until a caller
//! pulls, and each pull does only the work needed for one item.
//!
//! ## Composing Pipelines
//!
//! ```rust
//! use liu::sequence::LiuCSequenceExt;
//! use liu::sources::LiuCCounter;
//! use liu::consumer::LiuFTake;
//!
//! let squares = LiuCCounter::LiuFNew()
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n);
//! let first = LiuFTake(squares, 3)?;
//! assert_eq!(first, vec![0, 4, 16]);
//! ```

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::errors::{LiuError, Result};
use crate::metrics::{LiuCMetered, LiuCMetricsHandle};
use crate::stages::batch::LiuCBatch;
use crate::stages::chain::LiuCChain;
use crate::stages::enumerate::LiuCEnumerate;
use crate::stages::filter::{LiuCFilter, LiuCTryFilter};
use crate::stages::take::LiuCTake;
use crate::stages::transform::{LiuCMap, LiuCTryMap};

/// Lifecycle of a sequence.
///
/// The only transitions are `Ready -> Exhausted` and `Ready -> Failed`; both
/// targets are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiuCState {
    Ready,
    Exhausted,
    Failed,
}

impl LiuCState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LiuCState::Ready)
    }

    /// Answer for a pull on a terminal sequence, or `None` while still ready.
    ///
    /// Exhausted sequences keep reporting exhaustion. Failed sequences refuse
    /// every further pull with a pipeline error naming the stage.
    #[allow(non_snake_case)]
    pub fn LiuFTerminalPull<T>(&self, stage: &str) -> Option<Result<Option<T>>> {
        match self {
            LiuCState::Ready => None,
            LiuCState::Exhausted => Some(Ok(None)),
            LiuCState::Failed => Some(Err(LiuError::pipeline(stage, "pulled after failure"))),
        }
    }
}

/// Records the outcome of a pull in `state` and hands the outcome back.
#[allow(non_snake_case)]
pub fn LiuFTrack<T>(state: &mut LiuCState, outcome: Result<Option<T>>) -> Result<Option<T>> {
    match &outcome {
        Ok(Some(_)) => {}
        Ok(None) => *state = LiuCState::Exhausted,
        Err(_) => *state = LiuCState::Failed,
    }
    outcome
}

/// Contract that every Liu source and stage fulfills.
pub trait LiuCSequence {
    type Item;

    /// Human-readable name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Pulls the next item.
    fn next_item(&mut self) -> Result<Option<Self::Item>>;

    /// Current lifecycle state.
    fn state(&self) -> LiuCState;
}

impl<S: LiuCSequence + ?Sized> LiuCSequence for Box<S> {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_item(&mut self) -> Result<Option<Self::Item>> {
        (**self).next_item()
    }

    fn state(&self) -> LiuCState {
        (**self).state()
    }
}

/// Pulling through a mutable reference lets a caller bound or partially
/// consume a sequence and keep ownership of it.
impl<S: LiuCSequence + ?Sized> LiuCSequence for &mut S {
    type Item = S::Item;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_item(&mut self) -> Result<Option<Self::Item>> {
        (**self).next_item()
    }

    fn state(&self) -> LiuCState {
        (**self).state()
    }
}

/// Type-erased sequence, used where stages of different concrete types must
/// share one slot (chains, configured pipelines).
pub type LiuCBoxedSequence<T> = Box<dyn LiuCSequence<Item = T> + Send>;

/// Combinators available on every sequence.
///
/// Each combinator takes ownership of `self` as the upstream of a new stage;
/// the outermost stage is the pipeline.
pub trait LiuCSequenceExt: LiuCSequence + Sized {
    /// Keeps only the items for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> LiuCFilter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        LiuCFilter::LiuFNew(self, predicate)
    }

    /// Like [`filter`](Self::filter) with a predicate that can fail.
    fn try_filter<P>(self, predicate: P) -> LiuCTryFilter<Self, P>
    where
        P: FnMut(&Self::Item) -> Result<bool>,
    {
        LiuCTryFilter::LiuFNew(self, predicate)
    }

    /// Maps every item through `mapper`, one upstream item per pull.
    fn map<U, F>(self, mapper: F) -> LiuCMap<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        LiuCMap::LiuFNew(self, mapper)
    }

    /// Like [`map`](Self::map) with a mapping that can fail.
    fn try_map<U, F>(self, mapper: F) -> LiuCTryMap<Self, F>
    where
        F: FnMut(Self::Item) -> Result<U>,
    {
        LiuCTryMap::LiuFNew(self, mapper)
    }

    /// Groups items into vectors of `size`; fails when `size` is zero.
    fn batch(self, size: usize) -> Result<LiuCBatch<Self>> {
        LiuCBatch::LiuFNew(self, size)
    }

    /// Pairs every item with a running index beginning at `start`.
    fn enumerate_from(self, start: usize) -> LiuCEnumerate<Self> {
        LiuCEnumerate::LiuFNew(self, start)
    }

    /// Yields at most `count` items.
    fn take(self, count: usize) -> LiuCTake<Self> {
        LiuCTake::LiuFNew(self, count)
    }

    /// Continues with `next` once this sequence exhausts.
    fn chain<S>(self, next: S) -> LiuCChain<Self::Item>
    where
        Self: Send + 'static,
        S: LiuCSequence<Item = Self::Item> + Send + 'static,
    {
        LiuCChain::LiuFNew(vec![Box::new(self), Box::new(next)])
    }

    /// Records pull statistics into a shared handle.
    fn metered(self) -> (LiuCMetered<Self>, LiuCMetricsHandle) {
        LiuCMetered::LiuFNew(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> LiuCBoxedSequence<Self::Item>
    where
        Self: Send + 'static,
    {
        Box::new(self)
    }

    /// Exposes the sequence as a standard iterator of results.
    fn into_results(self) -> LiuCIter<Self> {
        LiuCIter::LiuFNew(self)
    }
}

impl<S: LiuCSequence> LiuCSequenceExt for S {}

/// Standard-library iterator over a sequence.
///
/// Yields `Ok(item)` until exhaustion. A failure is yielded once as `Err` and
/// the iterator is fused afterwards.
#[derive(Debug)]
pub struct LiuCIter<S> {
    inner: S,
    done: bool,
}

impl<S> LiuCIter<S> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(inner: S) -> Self {
        Self { inner, done: false }
    }

    /// Gives back the wrapped sequence.
    #[allow(non_snake_case)]
    pub fn LiuFIntoInner(self) -> S {
        self.inner
    }
}

impl<S: LiuCSequence> Iterator for LiuCIter<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next_item() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: LiuCSequence> FusedIterator for LiuCIter<S> {}
