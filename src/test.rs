//! Test utilities for riff-chunk.
//!
//! This module provides in-memory sources that behave like the awkward ones
//! found in practice: sources that hand out a few bytes per call, and sources
//! that fail partway through.

use std::io::{Error, ErrorKind, Read, Result};

/// An in-memory source that returns at most `step` bytes per read call.
///
/// Useful for checking that callers cope with short reads, and for counting
/// how many read calls an operation makes.
#[derive(Debug)]
pub struct TrickleReader<'a> {
    data: &'a [u8],
    step: usize,
    calls: usize,
}

impl<'a> TrickleReader<'a> {
    /// Create a source over `data` producing at most `step` bytes per call.
    pub fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step,
            calls: 0,
        }
    }

    /// Number of read calls made so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// The bytes that have not been read yet.
    pub fn rest(&self) -> &'a [u8] {
        self.data
    }
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.calls += 1;
        let n = buf.len().min(self.step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// An in-memory source that fails with `kind` once `data` is used up,
/// instead of reporting EOF.
#[derive(Debug)]
pub struct FailingReader<'a> {
    data: &'a [u8],
    kind: ErrorKind,
}

impl<'a> FailingReader<'a> {
    /// Create a source producing `data` and then failing with `kind`.
    pub fn new(data: &'a [u8], kind: ErrorKind) -> Self {
        Self { data, kind }
    }
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.data.is_empty() {
            return Err(Error::from(self.kind));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
