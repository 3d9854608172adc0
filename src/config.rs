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

//! # Liu Configuration Module
//!
//! Serializable descriptions of configured pipelines. A document names one
//! source and an ordered list of stages:
//!
//! ```yaml
//! name: numbered-lines
//! source:
//!   kind: lines
//!   path: data.txt
//!   trim: true
//! stages:
//!   - stage: filter.non_empty
//!   - stage: transform.number
//!     config: {start: 1}
//! ```
//!
//! Documents are parsed with `serde_json` or `serde_yaml`; building the
//! pipeline is the job of [`crate::pipeline::LiuCPipelineBuilder`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{LiuError, Result};
use crate::sources::{LiuCCompression, LiuCLineConfig};

fn default_name() -> String {
    "pipeline".to_string()
}

fn default_step() -> i64 {
    1
}

fn default_buffer_capacity() -> usize {
    LiuCLineConfig::default().buffer_capacity
}

/// Where a configured pipeline's items come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LiuCSourceConfig {
    /// Lines of a text file.
    Lines {
        path: PathBuf,
        #[serde(default)]
        trim: bool,
        #[serde(default)]
        compression: LiuCCompression,
        #[serde(default = "default_buffer_capacity")]
        buffer_capacity: usize,
    },
    /// Counter from `start` by `step`; unbounded unless `max` is given.
    Counter {
        #[serde(default)]
        start: i64,
        #[serde(default = "default_step")]
        step: i64,
        #[serde(default)]
        max: Option<i64>,
    },
    Fibonacci,
    /// Inline values.
    Values { values: Vec<Value> },
}

impl LiuCSourceConfig {
    /// Line-reader settings for a `lines` source.
    #[allow(non_snake_case)]
    pub fn LiuFLineConfig(&self) -> Option<LiuCLineConfig> {
        match self {
            LiuCSourceConfig::Lines {
                trim,
                compression,
                buffer_capacity,
                ..
            } => Some(LiuCLineConfig {
                trim: *trim,
                buffer_capacity: *buffer_capacity,
                compression: *compression,
            }),
            _ => None,
        }
    }
}

/// One named stage and its factory configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiuCStageConfig {
    pub stage: String,
    #[serde(default)]
    pub config: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiuCPipelineConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub source: LiuCSourceConfig,
    #[serde(default)]
    pub stages: Vec<LiuCStageConfig>,
    /// Optional bound applied after the last stage.
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl LiuCPipelineConfig {
    #[allow(non_snake_case)]
    pub fn LiuFFromJson(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[allow(non_snake_case)]
    pub fn LiuFFromYaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads a `.json`, `.yaml` or `.yml` document.
    #[allow(non_snake_case)]
    pub fn LiuFFromPath(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let text = std::fs::read_to_string(path)?;

        match extension.as_str() {
            "json" => Self::LiuFFromJson(&text),
            "yaml" | "yml" => Self::LiuFFromYaml(&text),
            _ => Err(LiuError::validation(format!(
                "unknown pipeline config format: {}",
                path.display()
            ))),
        }
    }
}
