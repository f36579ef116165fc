//! Conversion parameters.
//!
//! `ConvertConfig` carries the guide count and per-strand vertex count along
//! with the fixed layout of the source strand file. It can be built in code,
//! loaded from JSON, or assembled from CLI flags.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::parsing::step_size;

/// Records in an exported strand file.
pub const DEFAULT_STRAND_COUNT: usize = 901;
/// Vertex lines per strand record.
pub const DEFAULT_LINES_PER_STRAND: usize = 100;
/// Guide strands kept by default.
pub const DEFAULT_GUIDES_COUNT: usize = 50;
/// Vertices kept per guide strand by default.
pub const DEFAULT_VERTICES_PER_STRAND: usize = 20;

/// Byte order used for every integer and float in the `.hgl` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Host byte order; what the HairGL loader expects on the same machine.
    #[default]
    Native,
    Little,
    Big,
}

impl std::str::FromStr for ByteOrder {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(ByteOrder::Native),
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            other => Err(ConvertError::Config(format!(
                "unknown byte order '{}' (expected native, little or big)",
                other
            ))),
        }
    }
}

/// Parameters for a single conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertConfig {
    pub guides_count: usize,
    pub vertices_per_strand: usize,
    pub strand_count: usize,
    pub lines_per_strand: usize,
    pub byte_order: ByteOrder,
    /// Accept a `vertices_per_strand` that does not divide `lines_per_strand`.
    /// The step then truncates and the tail of each strand is never sampled.
    pub allow_uneven_step: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            guides_count: DEFAULT_GUIDES_COUNT,
            vertices_per_strand: DEFAULT_VERTICES_PER_STRAND,
            strand_count: DEFAULT_STRAND_COUNT,
            lines_per_strand: DEFAULT_LINES_PER_STRAND,
            byte_order: ByteOrder::Native,
            allow_uneven_step: false,
        }
    }
}

impl ConvertConfig {
    /// Config with the given guide and vertex counts and the standard layout.
    pub fn new(guides_count: usize, vertices_per_strand: usize) -> Self {
        ConvertConfig {
            guides_count,
            vertices_per_strand,
            ..Default::default()
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&text).map_err(|e| {
            ConvertError::Config(format!("{}: {}", path.as_ref().display(), e))
        })
    }

    /// Distance in lines between two sampled vertices of a strand.
    pub fn step_size(&self) -> usize {
        step_size(self.lines_per_strand, self.vertices_per_strand)
    }

    /// `vertices_per_strand - 1`, as written to the asset header.
    pub fn segments_count(&self) -> usize {
        self.vertices_per_strand.saturating_sub(1)
    }

    /// Highest strand index the guide formula spreads over.
    pub fn guide_span(&self) -> usize {
        self.strand_count.saturating_sub(1)
    }

    /// Lines the input must contain, or `None` if the layout overflows
    pub fn total_lines(&self) -> Option<usize> {
        self.strand_count.checked_mul(self.lines_per_strand)
    }

    /// Check that the parameters describe a conversion that can succeed.
    pub fn validate(&self) -> Result<()> {
        if self.guides_count == 0 {
            return Err(ConvertError::Config("guides_count must be positive".into()));
        }
        if self.vertices_per_strand == 0 {
            return Err(ConvertError::Config(
                "vertices_per_strand must be positive".into(),
            ));
        }
        if self.strand_count == 0 || self.lines_per_strand == 0 {
            return Err(ConvertError::Config(
                "strand_count and lines_per_strand must be positive".into(),
            ));
        }
        if self.vertices_per_strand > self.lines_per_strand {
            return Err(ConvertError::Config(format!(
                "vertices_per_strand ({}) exceeds lines_per_strand ({})",
                self.vertices_per_strand, self.lines_per_strand
            )));
        }
        if !self.allow_uneven_step && self.lines_per_strand % self.vertices_per_strand != 0 {
            return Err(ConvertError::Config(format!(
                "vertices_per_strand ({}) does not divide lines_per_strand ({}); step would truncate to {}",
                self.vertices_per_strand,
                self.lines_per_strand,
                self.step_size()
            )));
        }
        let vertex_count = self.guides_count.checked_mul(self.vertices_per_strand);
        if vertex_count.map_or(true, |n| i32::try_from(n).is_err()) {
            return Err(ConvertError::Config(format!(
                "{} guides x {} vertices overflows the asset header",
                self.guides_count, self.vertices_per_strand
            )));
        }
        if self.total_lines().is_none() {
            return Err(ConvertError::Config(format!(
                "{} strands x {} lines overflows the input line count",
                self.strand_count, self.lines_per_strand
            )));
        }
        // floor(i * span / n) is strictly increasing exactly when n <= span
        let distinct_limit = self.guide_span().max(1);
        if self.guides_count > distinct_limit {
            return Err(ConvertError::Config(format!(
                "guide selection over {} strands yields only {} distinct indices, {} requested",
                self.strand_count, distinct_limit, self.guides_count
            )));
        }
        Ok(())
    }
}
