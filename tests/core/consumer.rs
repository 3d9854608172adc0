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

use liu::consumer::{LiuCAccumulator, LiuFDrain, LiuFFold, LiuFForEach, LiuFPullUntil, LiuFTake};
use liu::errors::LiuError;
use liu::sequence::{LiuCSequence, LiuCSequenceExt, LiuCState};
use liu::sources::{LiuCCounter, LiuCFibonacci, LiuCIterSource, LiuCResultSource};

#[test]
fn LiuFTTakeBoundsInfiniteFibonacci() {
    let first_ten = LiuFTake(LiuCFibonacci::LiuFNew(), 10).unwrap();
    assert_eq!(first_ten, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn LiuFTTakeStopsEarlyOnFiniteInput() {
    let items = LiuFTake(LiuCIterSource::LiuFNew(vec![1, 2]), 5).unwrap();
    assert_eq!(items, vec![1, 2]);
}

#[test]
fn LiuFTDrainPropagatesUpstreamFailure() {
    let source = LiuCResultSource::LiuFNew(vec![Ok(1), Err(LiuError::Io("eof".into()))]);
    let err = LiuFDrain(source).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn LiuFTPullUntilBoundsInfiniteCounter() {
    let below = LiuFPullUntil(LiuCCounter::LiuFFrom(10, 5), |n| *n >= 30).unwrap();
    assert_eq!(below, vec![10, 15, 20, 25]);
}

#[test]
fn LiuFTForEachStopsOnVisitorError() {
    let mut counter = LiuCCounter::LiuFNew();
    let err = LiuFForEach(&mut counter, |n| {
        if n == 3 {
            Err(LiuError::internal("enough"))
        } else {
            Ok(())
        }
    })
    .unwrap_err();
    assert!(matches!(err, LiuError::Internal(_)));
    assert_eq!(counter.next_item().unwrap(), Some(4));
}

#[test]
fn LiuFTFoldJoinsLines() {
    let joined = LiuFFold(
        LiuCIterSource::LiuFNew(vec!["a", "b", "c"]).enumerate_from(1),
        String::new(),
        |mut acc, (index, line)| {
            acc.push_str(&format!("{index}{line}"));
            acc
        },
    )
    .unwrap();
    assert_eq!(joined, "1a2b3c");
}

#[test]
fn LiuFTAccumulatorRunningTotal() {
    let mut acc = LiuCAccumulator::LiuFNew(0i64, |total: i64, value: i64| total + value);
    acc.send(10).unwrap();
    acc.send(20).unwrap();
    assert_eq!(acc.received(), 2);
    assert_eq!(acc.finish().unwrap(), 30);

    match acc.send(5) {
        Err(LiuError::Pipeline { stage, message }) => {
            assert_eq!(stage, "accumulator");
            assert_eq!(message, "send after finish");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn LiuFTAccumulatorFeedsFromSequence() {
    let mut acc = LiuCAccumulator::LiuFNew(Vec::new(), |mut groups: Vec<usize>, group: Vec<i64>| {
        groups.push(group.len());
        groups
    });
    let batches = LiuCCounter::LiuFUpTo(7).batch(3).unwrap();
    assert_eq!(acc.LiuFFeed(batches).unwrap(), 3);
    assert_eq!(acc.finish().unwrap(), vec![3, 3, 1]);
}

#[test]
fn LiuFTCounterLeftReadyAfterBoundedConsumption() {
    let mut counter = LiuCCounter::LiuFNew();
    let _ = LiuFTake(&mut counter, 1000).unwrap();
    assert_eq!(counter.state(), LiuCState::Ready);
}
