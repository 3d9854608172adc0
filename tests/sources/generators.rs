//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Liu.
//! The Liu project belongs to the Dunimd project team.
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

use liu::consumer::{LiuFDrain, LiuFTake};
use liu::errors::LiuError;
use liu::sequence::{LiuCSequence, LiuCSequenceExt, LiuCState};
use liu::sources::{LiuCCounter, LiuCFibonacci, LiuCIterSource, LiuCResultSource};

#[test]
fn LiuFTCounterUpToIsFinite() {
    assert_eq!(LiuFDrain(LiuCCounter::LiuFUpTo(5)).unwrap(), vec![0, 1, 2, 3, 4]);
    assert!(LiuFDrain(LiuCCounter::LiuFUpTo(0)).unwrap().is_empty());
}

#[test]
fn LiuFTCounterWithStepNeverExhausts() {
    let mut counter = LiuCCounter::LiuFFrom(-4, 3);
    assert_eq!(LiuFTake(&mut counter, 4).unwrap(), vec![-4, -1, 2, 5]);
    assert_eq!(counter.state(), LiuCState::Ready);
}

#[test]
fn LiuFTSquaresOfCounter() {
    let squares = LiuCCounter::LiuFUpTo(5).map(|n| n * n);
    assert_eq!(LiuFDrain(squares).unwrap(), vec![0, 1, 4, 9, 16]);
}

#[test]
fn LiuFTFibonacciIsLazy() {
    let mut fib = LiuCFibonacci::LiuFNew();
    assert_eq!(fib.next_item().unwrap(), Some(0));
    assert_eq!(fib.next_item().unwrap(), Some(1));
    assert_eq!(fib.next_item().unwrap(), Some(1));
    assert_eq!(LiuFTake(&mut fib, 3).unwrap(), vec![2, 3, 5]);
}

#[test]
fn LiuFTFibonacciFiltered() {
    let even_terms = LiuCFibonacci::LiuFNew().filter(|n| n % 2 == 0).take(5);
    assert_eq!(LiuFDrain(even_terms).unwrap(), vec![0, 2, 8, 34, 144]);
}

#[test]
fn LiuFTIterSourceExhaustsOnce() {
    let mut source = LiuCIterSource::LiuFNew(vec!["x"]);
    assert_eq!(source.name(), "source.iter");
    assert_eq!(source.next_item().unwrap(), Some("x"));
    assert_eq!(source.next_item().unwrap(), None);
    assert_eq!(source.next_item().unwrap(), None);
}

#[test]
fn LiuFTResultSourceFailsAtFirstError() {
    let mut source = LiuCResultSource::LiuFNew(vec![
        Ok(1u8),
        Err(LiuError::stage("upstream", "bad record")),
        Ok(2u8),
    ]);
    assert_eq!(source.next_item().unwrap(), Some(1));
    assert!(matches!(source.next_item(), Err(LiuError::Stage { .. })));
    assert!(matches!(source.next_item(), Err(LiuError::Pipeline { .. })));
}
