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

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{LiuCPipelineConfig, LiuCSourceConfig};
use crate::consumer::{LiuFDrain, LiuFTake};
use crate::errors::{LiuError, Result};
use crate::metrics::LiuCTimer;
use crate::sequence::{LiuCBoxedSequence, LiuCSequence, LiuCSequenceExt, LiuCState};
use crate::sources::{LiuCCounter, LiuCFibonacci, LiuCIterSource, LiuCLineSource};

/// Builds one stage on top of an upstream of JSON values.
pub type LiuCStageFactory =
    fn(LiuCBoxedSequence<Value>, &Value) -> Result<LiuCBoxedSequence<Value>>;

/// Configured pipeline over `serde_json::Value` items.
///
/// The pipeline is just its outermost stage plus the names of the stages it
/// was built from; it is itself a sequence and may be pulled directly.
pub struct LiuCPipeline {
    name: String,
    stages: Vec<String>,
    tail: LiuCBoxedSequence<Value>,
}

impl LiuCPipeline {
    #[allow(non_snake_case)]
    pub fn LiuFNew(name: impl Into<String>, stages: Vec<String>, tail: LiuCBoxedSequence<Value>) -> Self {
        Self {
            name: name.into(),
            stages,
            tail,
        }
    }

    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    pub fn stage_names(&self) -> &[String] {
        &self.stages
    }

    /// Drains the pipeline. Must only be used when the source is finite or a
    /// bound was configured.
    #[allow(non_snake_case)]
    pub fn LiuFRun(self) -> Result<Vec<Value>> {
        let _timer = LiuCTimer::LiuFStart(format!("pipeline '{}'", self.name));
        LiuFDrain(self)
    }

    /// Pulls at most `count` items; the pipeline stays usable afterwards.
    #[allow(non_snake_case)]
    pub fn LiuFRunLimited(&mut self, count: usize) -> Result<Vec<Value>> {
        let _timer = LiuCTimer::LiuFStart(format!("pipeline '{}' ({} items)", self.name, count));
        LiuFTake(self, count)
    }
}

impl LiuCSequence for LiuCPipeline {
    type Item = Value;

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn next_item(&mut self) -> Result<Option<Value>> {
        self.tail.next_item().map_err(|err| {
            log::warn!("pipeline '{}' failed: {}", self.name, err);
            err
        })
    }

    fn state(&self) -> LiuCState {
        self.tail.state()
    }
}

impl std::fmt::Debug for LiuCPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiuCPipeline")
            .field("name", &self.name)
            .field("stages", &self.stages)
            .field("state", &self.tail.state())
            .finish()
    }
}

/// Opens the source described by `config` as a sequence of JSON values.
#[allow(non_snake_case)]
pub fn LiuFBuildSource(config: &LiuCSourceConfig) -> Result<LiuCBoxedSequence<Value>> {
    let source = match config {
        LiuCSourceConfig::Lines { path, .. } => {
            let line_config = config.LiuFLineConfig().unwrap_or_default();
            LiuCLineSource::LiuFOpenWithConfig(path, &line_config)?
                .map(Value::String)
                .boxed()
        }
        LiuCSourceConfig::Counter { start, step, max } => {
            let counter = LiuCCounter::LiuFFrom(*start, *step);
            let counter = match max {
                Some(end) => counter.LiuFUntil(*end),
                None => counter,
            };
            counter.map(Value::from).boxed()
        }
        LiuCSourceConfig::Fibonacci => LiuCFibonacci::LiuFNew()
            .try_map(|term| {
                u64::try_from(term).map(Value::from).map_err(|_| {
                    LiuError::stage("source.fibonacci", format!("{term} exceeds JSON integer range"))
                })
            })
            .boxed(),
        LiuCSourceConfig::Values { values } => LiuCIterSource::LiuFNew(values.clone()).boxed(),
    };
    Ok(source)
}

/// Builder that knows how to instantiate stages from configuration.
pub struct LiuCPipelineBuilder {
    factories: HashMap<String, LiuCStageFactory>,
}

impl LiuCPipelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        LiuCPipelineBuilder {
            factories: HashMap::new(),
        }
    }

    /// Creates a builder pre-loaded with the bundled stages.
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder.register_defaults();
        builder
    }

    /// Registers a factory for the given stage name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, factory: LiuCStageFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    fn register_defaults(&mut self) {
        // filters
        self.register(
            "filter.non_empty",
            crate::stages::filter::LiuFFilterNonEmptyFactory as LiuCStageFactory,
        );
        self.register(
            "filter.contains",
            crate::stages::filter::LiuFFilterContainsFactory as LiuCStageFactory,
        );
        self.register(
            "filter.starts_with",
            crate::stages::filter::LiuFFilterStartsWithFactory as LiuCStageFactory,
        );
        self.register(
            "filter.regex",
            crate::stages::filter::LiuFFilterRegexFactory as LiuCStageFactory,
        );
        self.register(
            "filter.even",
            crate::stages::filter::LiuFFilterEvenFactory as LiuCStageFactory,
        );

        // transforms
        self.register(
            "transform.trim",
            crate::stages::transform::LiuFTransformTrimFactory as LiuCStageFactory,
        );
        self.register(
            "transform.lowercase",
            crate::stages::transform::LiuFTransformLowercaseFactory as LiuCStageFactory,
        );
        self.register(
            "transform.uppercase",
            crate::stages::transform::LiuFTransformUppercaseFactory as LiuCStageFactory,
        );
        self.register(
            "transform.square",
            crate::stages::transform::LiuFTransformSquareFactory as LiuCStageFactory,
        );
        self.register(
            "transform.number",
            crate::stages::enumerate::LiuFTransformNumberFactory as LiuCStageFactory,
        );

        // grouping and bounds
        self.register(
            "batch",
            crate::stages::batch::LiuFBatchFactory as LiuCStageFactory,
        );
        self.register(
            "limit",
            crate::stages::take::LiuFLimitFactory as LiuCStageFactory,
        );
    }

    /// Builds a pipeline from configuration.
    ///
    /// Stage names are resolved before the source is opened, so an unknown
    /// stage never leaves a file handle behind. A factory rejecting its
    /// config drops everything built so far.
    pub fn build_from_config(&self, config: &LiuCPipelineConfig) -> Result<LiuCPipeline> {
        let mut factories = Vec::with_capacity(config.stages.len());
        for (index, step) in config.stages.iter().enumerate() {
            let factory = self.factories.get(step.stage.as_str()).ok_or_else(|| {
                LiuError::validation(format!(
                    "pipeline step #{index}: unknown stage '{}'",
                    step.stage
                ))
            })?;
            factories.push((step, *factory));
        }

        let mut tail = LiuFBuildSource(&config.source)?;
        let mut names = Vec::with_capacity(factories.len());
        for (step, factory) in factories {
            tail = factory(tail, &step.config)?;
            names.push(step.stage.clone());
        }
        if let Some(count) = config.max_items {
            tail = tail.take(count).boxed();
            names.push("limit".to_string());
        }

        log::info!(
            "pipeline '{}' built with {} stages",
            config.name,
            names.len()
        );
        Ok(LiuCPipeline::LiuFNew(config.name.clone(), names, tail))
    }

    #[allow(non_snake_case)]
    pub fn LiuFBuildFromJson(&self, text: &str) -> Result<LiuCPipeline> {
        self.build_from_config(&LiuCPipelineConfig::LiuFFromJson(text)?)
    }

    #[allow(non_snake_case)]
    pub fn LiuFBuildFromYaml(&self, text: &str) -> Result<LiuCPipeline> {
        self.build_from_config(&LiuCPipelineConfig::LiuFFromYaml(text)?)
    }
}

impl Default for LiuCPipelineBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}
