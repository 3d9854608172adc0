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

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LiuError, Result};
use crate::sequence::{LiuCSequence, LiuCState, LiuFTrack};

/// Compression applied to a line source's input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiuCCompression {
    None,
    Gzip,
    Zstd,
    /// Decide from the file extension.
    #[default]
    Auto,
}

impl LiuCCompression {
    #[allow(non_snake_case)]
    pub fn LiuFDetect(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "gz" | "gzip" => LiuCCompression::Gzip,
            "zst" | "zstd" => LiuCCompression::Zstd,
            _ => LiuCCompression::None,
        }
    }

    fn resolve(self, path: &Path) -> Self {
        match self {
            LiuCCompression::Auto => Self::LiuFDetect(path),
            other => other,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LiuCLineConfig {
    /// Strip surrounding whitespace, not just the line terminator.
    pub trim: bool,
    pub buffer_capacity: usize,
    pub compression: LiuCCompression,
}

impl Default for LiuCLineConfig {
    fn default() -> Self {
        Self {
            trim: false,
            buffer_capacity: 8 * 1024,
            compression: LiuCCompression::Auto,
        }
    }
}

type LineReader = Box<dyn BufRead + Send>;

/// Finite source yielding the lines of a text resource.
///
/// The handle is held only while the source is [`LiuCState::Ready`]. It is
/// released when the resource is exhausted, when a read fails (before the
/// error is returned) and when the source is dropped early.
pub struct LiuCLineSource {
    origin: String,
    reader: Option<LineReader>,
    trim: bool,
    line: String,
    lines_read: usize,
    bytes_read: usize,
    state: LiuCState,
}

impl LiuCLineSource {
    #[allow(non_snake_case)]
    pub fn LiuFOpen(path: impl AsRef<Path>) -> Result<Self> {
        Self::LiuFOpenWithConfig(path, &LiuCLineConfig::default())
    }

    #[allow(non_snake_case)]
    pub fn LiuFOpenWithConfig(path: impl AsRef<Path>, config: &LiuCLineConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| LiuError::Io(format!("{}: {}", path.display(), err)))?;
        let capacity = config.buffer_capacity.max(1);

        let reader: LineReader = match config.compression.resolve(path) {
            LiuCCompression::Gzip => open_gzip(file, capacity)?,
            LiuCCompression::Zstd => open_zstd(file, capacity)?,
            _ => Box::new(BufReader::with_capacity(capacity, file)),
        };

        log::debug!("line source opened {}", path.display());
        Ok(Self::with_reader(path.display().to_string(), reader, config.trim))
    }

    /// Wraps an already open reader. `origin` names it in logs and errors.
    #[allow(non_snake_case)]
    pub fn LiuFFromReader<R>(origin: impl Into<String>, reader: R, trim: bool) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self::with_reader(origin.into(), Box::new(reader), trim)
    }

    fn with_reader(origin: String, reader: LineReader, trim: bool) -> Self {
        Self {
            origin,
            reader: Some(reader),
            trim,
            line: String::new(),
            lines_read: 0,
            bytes_read: 0,
            state: LiuCState::Ready,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    /// Whether the underlying handle is still held.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn release(&mut self, reason: &str) {
        if self.reader.take().is_some() {
            log::debug!(
                "line source {} released ({}) after {} lines",
                self.origin,
                reason,
                self.lines_read
            );
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        self.line.clear();
        match reader.read_line(&mut self.line) {
            Ok(0) => {
                self.release("exhausted");
                Ok(None)
            }
            Ok(n) => {
                self.bytes_read += n;
                self.lines_read += 1;
                let text = if self.trim {
                    self.line.trim()
                } else {
                    self.line.trim_end_matches(['\n', '\r'])
                };
                Ok(Some(text.to_string()))
            }
            Err(err) => {
                let line_no = self.lines_read + 1;
                self.release("failed");
                log::warn!("line source {} failed at line {}: {}", self.origin, line_no, err);
                Err(LiuError::Io(format!("{}: line {}: {}", self.origin, line_no, err)))
            }
        }
    }
}

impl LiuCSequence for LiuCLineSource {
    type Item = String;

    fn name(&self) -> &'static str {
        "source.lines"
    }

    fn next_item(&mut self) -> Result<Option<String>> {
        if let Some(done) = self.state.LiuFTerminalPull(self.name()) {
            return done;
        }
        let outcome = self.read_line();
        LiuFTrack(&mut self.state, outcome)
    }

    fn state(&self) -> LiuCState {
        self.state
    }
}

impl Drop for LiuCLineSource {
    fn drop(&mut self) {
        self.release("abandoned");
    }
}

impl std::fmt::Debug for LiuCLineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiuCLineSource")
            .field("origin", &self.origin)
            .field("open", &self.is_open())
            .field("lines_read", &self.lines_read)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(feature = "compression")]
fn open_gzip(file: File, capacity: usize) -> Result<LineReader> {
    let decoder = flate2::read::MultiGzDecoder::new(file);
    Ok(Box::new(BufReader::with_capacity(capacity, decoder)))
}

#[cfg(feature = "compression")]
fn open_zstd(file: File, capacity: usize) -> Result<LineReader> {
    let decoder = zstd::stream::read::Decoder::new(file)
        .map_err(|e| LiuError::Io(format!("zstd decoder error: {}", e)))?;
    Ok(Box::new(BufReader::with_capacity(capacity, decoder)))
}

#[cfg(not(feature = "compression"))]
fn open_gzip(_file: File, _capacity: usize) -> Result<LineReader> {
    Err(LiuError::validation("gzip input requires 'compression' feature"))
}

#[cfg(not(feature = "compression"))]
fn open_zstd(_file: File, _capacity: usize) -> Result<LineReader> {
    Err(LiuError::validation("zstd input requires 'compression' feature"))
}
