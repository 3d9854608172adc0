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

use crate::errors::Result;
use crate::sequence::{LiuCSequence, LiuCState, LiuFTrack};

/// Source over any Rust iterator.
///
/// The iterator is dropped as soon as it reports its end.
#[derive(Debug)]
pub struct LiuCIterSource<I> {
    inner: Option<I>,
    state: LiuCState,
}

impl<I: Iterator> LiuCIterSource<I> {
    #[allow(non_snake_case)]
    pub fn LiuFNew<C>(items: C) -> Self
    where
        C: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            inner: Some(items.into_iter()),
            state: LiuCState::Ready,
        }
    }
}

impl<I: Iterator> LiuCSequence for LiuCIterSource<I> {
    type Item = I::Item;

    fn name(&self) -> &'static str {
        "source.iter"
    }

    fn next_item(&mut self) -> Result<Option<I::Item>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let item = self.inner.as_mut().and_then(Iterator::next);
        if item.is_none() {
            self.inner = None;
        }
        LiuFTrack(&mut self.state, Ok(item))
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

/// Source over an iterator of results; an `Err` item fails the pull that
/// reached it and drops the iterator.
#[derive(Debug)]
pub struct LiuCResultSource<I> {
    inner: Option<I>,
    state: LiuCState,
}

impl<I: Iterator> LiuCResultSource<I> {
    #[allow(non_snake_case)]
    pub fn LiuFNew<C>(items: C) -> Self
    where
        C: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            inner: Some(items.into_iter()),
            state: LiuCState::Ready,
        }
    }
}

impl<I, T> LiuCSequence for LiuCResultSource<I>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = T;

    fn name(&self) -> &'static str {
        "source.results"
    }

    fn next_item(&mut self) -> Result<Option<T>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = match self.inner.as_mut().and_then(Iterator::next) {
            Some(Ok(item)) => Ok(Some(item)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        };
        if !matches!(outcome, Ok(Some(_))) {
            self.inner = None;
        }
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}
