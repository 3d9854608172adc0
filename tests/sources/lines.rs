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

use std::io::{self, BufRead, BufReader, Cursor, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tempfile::NamedTempFile;
use liu::consumer::{LiuFDrain, LiuFTake};
use liu::errors::LiuError;
use liu::sequence::{LiuCSequence, LiuCSequenceExt, LiuCState};
use liu::sources::{LiuCCompression, LiuCLineConfig, LiuCLineSource};

/// Reader that records when it is dropped and can fail after its data.
struct LiuCTTrackedReader {
    inner: Cursor<Vec<u8>>,
    fail_at_end: bool,
    dropped: Arc<AtomicBool>,
}

impl Read for LiuCTTrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && self.fail_at_end {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream reset"));
        }
        Ok(n)
    }
}

impl Drop for LiuCTTrackedReader {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

fn LiuFTTracked(data: &str, fail_at_end: bool) -> (BufReader<LiuCTTrackedReader>, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let reader = LiuCTTrackedReader {
        inner: Cursor::new(data.as_bytes().to_vec()),
        fail_at_end,
        dropped: dropped.clone(),
    };
    (BufReader::new(reader), dropped)
}

fn LiuFTWriteTemp(content: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("tmp");
    file.write_all(content).expect("write");
    file.flush().expect("flush");
    file
}

#[test]
fn LiuFTReadsFileLinesInOrder() {
    let file = LiuFTWriteTemp(b"alpha\nbeta\n\ngamma\n", ".txt");
    let source = LiuCLineSource::LiuFOpen(file.path()).unwrap();
    let lines = LiuFDrain(source).unwrap();
    assert_eq!(lines, vec!["alpha", "beta", "", "gamma"]);
}

#[test]
fn LiuFTTrimConfigStripsWhitespace() {
    let file = LiuFTWriteTemp(b"  padded  \n\tTabbed\r\n", ".txt");
    let config = LiuCLineConfig {
        trim: true,
        ..Default::default()
    };
    let source = LiuCLineSource::LiuFOpenWithConfig(file.path(), &config).unwrap();
    assert_eq!(LiuFDrain(source).unwrap(), vec!["padded", "Tabbed"]);
}

#[test]
fn LiuFTEmptyFileExhaustsImmediately() {
    let file = LiuFTWriteTemp(b"", ".txt");
    let mut source = LiuCLineSource::LiuFOpen(file.path()).unwrap();
    assert_eq!(source.next_item().unwrap(), None);
    assert_eq!(source.state(), LiuCState::Exhausted);
    assert!(!source.is_open());
    assert_eq!(source.next_item().unwrap(), None);
}

#[test]
fn LiuFTNumberedNonEmptyLines() {
    let file = LiuFTWriteTemp(b"first\n\n  \nsecond\n", ".txt");
    let config = LiuCLineConfig {
        trim: true,
        ..Default::default()
    };
    let numbered = LiuCLineSource::LiuFOpenWithConfig(file.path(), &config)
        .unwrap()
        .filter(|line| !line.is_empty())
        .enumerate_from(1)
        .map(|(index, line)| format!("{index}: {line}"));
    assert_eq!(LiuFDrain(numbered).unwrap(), vec!["1: first", "2: second"]);
}

#[test]
fn LiuFTExhaustionReleasesHandle() {
    let (reader, dropped) = LiuFTTracked("one\ntwo\n", false);
    let mut source = LiuCLineSource::LiuFFromReader("tracked", reader, false);
    assert_eq!(source.next_item().unwrap().as_deref(), Some("one"));
    assert!(!dropped.load(Ordering::SeqCst));
    assert_eq!(source.next_item().unwrap().as_deref(), Some("two"));
    assert_eq!(source.next_item().unwrap(), None);
    assert!(dropped.load(Ordering::SeqCst));
    assert_eq!(source.bytes_read(), 8);
}

#[test]
fn LiuFTAbandonedPipelineReleasesHandle() {
    let (reader, dropped) = LiuFTTracked("a\nb\nc\n", false);
    let source = LiuCLineSource::LiuFFromReader("tracked", reader, false);
    let mut pipeline = source.map(|line| line.to_uppercase());
    assert_eq!(LiuFTake(&mut pipeline, 1).unwrap(), vec!["A"]);
    assert!(!dropped.load(Ordering::SeqCst));
    drop(pipeline);
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn LiuFTReadFailureReleasesHandleBeforeSurfacing() {
    let (reader, dropped) = LiuFTTracked("ok\npartial", true);
    let mut source = LiuCLineSource::LiuFFromReader("flaky", reader, false);
    assert_eq!(source.next_item().unwrap().as_deref(), Some("ok"));

    let err = source.next_item().unwrap_err();
    match &err {
        LiuError::Io(message) => {
            assert!(message.contains("flaky"));
            assert!(message.contains("stream reset"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(dropped.load(Ordering::SeqCst));
    assert!(!source.is_open());
    assert_eq!(source.state(), LiuCState::Failed);
    assert!(matches!(source.next_item(), Err(LiuError::Pipeline { .. })));
}

#[test]
fn LiuFTInvalidUtf8IsIoFailure() {
    let file = LiuFTWriteTemp(&[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'], ".txt");
    let mut source = LiuCLineSource::LiuFOpen(file.path()).unwrap();
    assert_eq!(source.next_item().unwrap().as_deref(), Some("ok"));
    assert!(source.next_item().unwrap_err().is_io());
}

#[cfg(feature = "compression")]
#[test]
fn LiuFTGzipInputDetectedFromExtension() {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(b"zipped one\nzipped two\n").unwrap();
    let file = LiuFTWriteTemp(&encoder.finish().unwrap(), ".txt.gz");

    let source = LiuCLineSource::LiuFOpen(file.path()).unwrap();
    assert_eq!(LiuFDrain(source).unwrap(), vec!["zipped one", "zipped two"]);
}

#[cfg(feature = "compression")]
#[test]
fn LiuFTZstdInputWithExplicitCompression() {
    let compressed = zstd::encode_all(&b"z1\nz2\nz3"[..], 0).unwrap();
    let file = LiuFTWriteTemp(&compressed, ".bin");
    let config = LiuCLineConfig {
        compression: LiuCCompression::Zstd,
        ..Default::default()
    };
    let source = LiuCLineSource::LiuFOpenWithConfig(file.path(), &config).unwrap();
    assert_eq!(LiuFDrain(source).unwrap(), vec!["z1", "z2", "z3"]);
}

#[test]
fn LiuFTReaderSourceWorksWithAnyBufRead() {
    let reader: Box<dyn BufRead + Send> = Box::new(Cursor::new("x\ny".as_bytes()));
    let source = LiuCLineSource::LiuFFromReader("boxed", reader, false);
    assert_eq!(LiuFDrain(source).unwrap(), vec!["x", "y"]);
}
