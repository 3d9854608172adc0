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

//! # Liu Consumer Module
//!
//! Drivers that pull from a sequence, plus the push-style accumulator.
//!
//! Consumers decide how far a pipeline runs. Infinite sequences must be
//! consumed with an explicit bound: a pull count ([`LiuFTake`]) or a stop
//! predicate ([`LiuFPullUntil`]). Every driver accepts `&mut seq` as well as
//! an owned sequence, so a caller can stop early and keep the sequence.
//!
//! ```rust
//! use liu::consumer::LiuFTake;
//! use liu::sources::LiuCFibonacci;
//!
//! let mut fib = LiuCFibonacci::LiuFNew();
//! assert_eq!(LiuFTake(&mut fib, 5)?, vec![0, 1, 1, 2, 3]);
//! assert_eq!(LiuFTake(&mut fib, 2)?, vec![5, 8]);
//! ```

use crate::errors::{LiuError, Result};
use crate::sequence::LiuCSequence;

/// Pulls until exhaustion and collects every item.
#[allow(non_snake_case)]
pub fn LiuFDrain<S: LiuCSequence>(mut seq: S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    while let Some(item) = seq.next_item()? {
        items.push(item);
    }
    Ok(items)
}

/// Pulls at most `count` times.
#[allow(non_snake_case)]
pub fn LiuFTake<S: LiuCSequence>(mut seq: S, count: usize) -> Result<Vec<S::Item>> {
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        match seq.next_item()? {
            Some(item) => items.push(item),
            None => break,
        }
    }
    Ok(items)
}

/// Pulls until `stop` holds for an item or the sequence exhausts. The item
/// that triggered the stop is consumed but not returned.
#[allow(non_snake_case)]
pub fn LiuFPullUntil<S, P>(mut seq: S, mut stop: P) -> Result<Vec<S::Item>>
where
    S: LiuCSequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut items = Vec::new();
    while let Some(item) = seq.next_item()? {
        if stop(&item) {
            break;
        }
        items.push(item);
    }
    Ok(items)
}

/// Hands every item to `visit`, stopping at the first error from either side.
/// Returns the number of items visited.
#[allow(non_snake_case)]
pub fn LiuFForEach<S, F>(mut seq: S, mut visit: F) -> Result<usize>
where
    S: LiuCSequence,
    F: FnMut(S::Item) -> Result<()>,
{
    let mut visited = 0;
    while let Some(item) = seq.next_item()? {
        visit(item)?;
        visited += 1;
    }
    Ok(visited)
}

#[allow(non_snake_case)]
pub fn LiuFFold<S, A, F>(mut seq: S, init: A, mut fold: F) -> Result<A>
where
    S: LiuCSequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    while let Some(item) = seq.next_item()? {
        acc = fold(acc, item);
    }
    Ok(acc)
}

/// Push-driven running fold.
///
/// The inverse of a pull pipeline: the producer `send`s values in and
/// `finish` closes the accumulator, handing back the total. A finished
/// accumulator refuses further values.
#[derive(Debug)]
pub struct LiuCAccumulator<A, F> {
    total: Option<A>,
    fold: F,
    received: usize,
}

impl<A, F> LiuCAccumulator<A, F> {
    #[allow(non_snake_case)]
    pub fn LiuFNew(init: A, fold: F) -> Self {
        Self {
            total: Some(init),
            fold,
            received: 0,
        }
    }

    pub fn send<T>(&mut self, value: T) -> Result<()>
    where
        F: FnMut(A, T) -> A,
    {
        let total = self
            .total
            .take()
            .ok_or_else(|| LiuError::pipeline("accumulator", "send after finish"))?;
        self.total = Some((self.fold)(total, value));
        self.received += 1;
        Ok(())
    }

    /// Pushes every item of a sequence into the accumulator.
    #[allow(non_snake_case)]
    pub fn LiuFFeed<S>(&mut self, seq: S) -> Result<usize>
    where
        S: LiuCSequence,
        F: FnMut(A, S::Item) -> A,
    {
        LiuFForEach(seq, |item| self.send(item))
    }

    pub fn finish(&mut self) -> Result<A> {
        self.total
            .take()
            .ok_or_else(|| LiuError::pipeline("accumulator", "already finished"))
    }

    pub fn received(&self) -> usize {
        self.received
    }

    pub fn is_finished(&self) -> bool {
        self.total.is_none()
    }
}
