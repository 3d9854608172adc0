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

use serde_json::{json, Value};
use liu::consumer::LiuFDrain;
use liu::errors::LiuError;
use liu::sequence::{LiuCSequence, LiuCSequenceExt, LiuCState};
use liu::sources::{LiuCCounter, LiuCIterSource};
use liu::stages::filter::{LiuFFilterContainsFactory, LiuFFilterNonEmptyFactory, LiuFFilterRegexFactory, LiuFFilterStartsWithFactory};

#[test]
fn LiuFTFilterEvenThenSquare() {
    let seq = LiuCIterSource::LiuFNew(0..10).filter(|n| n % 2 == 0).map(|n| n * n);
    assert_eq!(LiuFDrain(seq).unwrap(), vec![0, 4, 16, 36, 64]);
}

#[test]
fn LiuFTFilterRejectingEverythingExhausts() {
    let mut seq = LiuCIterSource::LiuFNew(vec![1, 3, 5]).filter(|n| n % 2 == 0);
    assert_eq!(seq.next_item().unwrap(), None);
    assert_eq!(seq.state(), LiuCState::Exhausted);
}

#[test]
fn LiuFTFilterOnInfiniteSourceIsLazy() {
    let (counter, metrics) = LiuCCounter::LiuFNew().metered();
    let mut seq = counter.filter(|n| n % 10 == 9);
    assert_eq!(seq.next_item().unwrap(), Some(9));
    assert_eq!(metrics.LiuFSnapshot().pulls, 10);
    assert_eq!(seq.next_item().unwrap(), Some(19));
    assert_eq!(metrics.LiuFSnapshot().pulls, 20);
}

#[test]
fn LiuFTTryFilterPropagatesPredicateFailure() {
    let mut seq = LiuCIterSource::LiuFNew(vec![2, 0, 4]).try_filter(|n| {
        if *n == 0 {
            Err(LiuError::stage("divides", "division by zero"))
        } else {
            Ok(12 % n == 0)
        }
    });
    assert_eq!(seq.next_item().unwrap(), Some(2));
    assert!(matches!(seq.next_item(), Err(LiuError::Stage { .. })));
    assert_eq!(seq.state(), LiuCState::Failed);
}

#[test]
fn LiuFTFilterFactoriesOnText() {
    let lines = vec![
        json!("hello world"),
        json!(""),
        Value::Null,
        json!("help wanted"),
        json!("say hello"),
    ];

    let upstream = LiuCIterSource::LiuFNew(lines.clone()).boxed();
    let seq = LiuFFilterNonEmptyFactory(upstream, &Value::Null).unwrap();
    assert_eq!(LiuFDrain(seq).unwrap().len(), 3);

    let upstream = LiuCIterSource::LiuFNew(lines.clone()).boxed();
    let seq = LiuFFilterContainsFactory(upstream, &json!({"contains": "hello"})).unwrap();
    assert_eq!(LiuFDrain(seq).unwrap(), vec![json!("hello world"), json!("say hello")]);

    let upstream = LiuCIterSource::LiuFNew(lines.clone()).boxed();
    let seq = LiuFFilterStartsWithFactory(upstream, &json!({"prefix": "hel"})).unwrap();
    assert_eq!(LiuFDrain(seq).unwrap(), vec![json!("hello world"), json!("help wanted")]);

    let upstream = LiuCIterSource::LiuFNew(lines).boxed();
    let seq = LiuFFilterRegexFactory(upstream, &json!({"pattern": "o$"})).unwrap();
    assert_eq!(LiuFDrain(seq).unwrap(), vec![json!("say hello")]);
}

#[test]
fn LiuFTFilterFactoryRequiresConfig() {
    let upstream = LiuCIterSource::LiuFNew(vec![json!("a")]).boxed();
    let err = LiuFFilterContainsFactory(upstream, &json!({})).err().unwrap();
    assert_eq!(
        err,
        LiuError::validation("filter.contains requires string 'contains'")
    );
}
