//! Strand file parsing
//!
//! The exported strand file is a flat list of `tag x y z` lines grouped into
//! fixed-size records, one record per strand. Only guide strands are parsed;
//! every other record is read past without interpretation.
//!
//! # Submodules
//! - `guides` - Guide index selection and the per-strand sampling rule
//! - `records` - Vertex line parsing and the line reader

mod guides;
mod records;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::hair::{RootPoint, Vertex};

pub use guides::{distinct_count, keeps_line, select_guide_indices, step_size};
pub use records::parse_vertex_line;

use records::LineReader;

/// Guide strands sampled from a strand file
#[derive(Debug, Clone, PartialEq)]
pub struct SampledStrands {
    /// Strand indices that were kept, ascending
    pub guide_indices: Vec<usize>,
    /// `vertices_per_strand` vertices per guide, strand-major
    pub vertices: Vec<Vertex>,
    /// First sampled vertex of each guide, in guide order
    pub roots: Vec<RootPoint>,
}

/// Read guide strands from a strand file on disk
pub fn read_guide_strands_file<P: AsRef<Path>>(
    path: P,
    config: &ConvertConfig,
) -> Result<SampledStrands> {
    let file = File::open(path)?;
    read_guide_strands(BufReader::new(file), config)
}

/// Read guide strands from any buffered reader.
///
/// The config is validated first, which guarantees distinct guide indices.
/// Every one of the `strand_count` records must be present even though only
/// guide records are parsed.
pub fn read_guide_strands<R: BufRead>(reader: R, config: &ConvertConfig) -> Result<SampledStrands> {
    config.validate()?;

    let guide_indices = select_guide_indices(config.guides_count, config.guide_span());

    let step = config.step_size();
    let per_strand = config.vertices_per_strand;
    // validate() bounds the product
    let mut lines = LineReader::new(reader, config.total_lines().unwrap_or(usize::MAX));
    let mut vertices = Vec::with_capacity(config.guides_count * per_strand);
    let mut roots = Vec::with_capacity(config.guides_count);

    let mut pending = guide_indices.iter().copied().peekable();
    for record in 0..config.strand_count {
        if pending.next_if_eq(&record).is_none() {
            lines.skip_lines(config.lines_per_strand)?;
            continue;
        }

        let start = vertices.len();
        sample_strand(&mut lines, record, step, config, &mut vertices)?;
        roots.push(vertices[start].root_point());
        debug!(
            strand = record,
            root_x = roots[roots.len() - 1].x,
            root_y = roots[roots.len() - 1].y,
            "sampled guide strand"
        );
    }

    debug!(
        lines = lines.lines_read(),
        guides = roots.len(),
        vertices = vertices.len(),
        "finished reading strand file"
    );

    Ok(SampledStrands {
        guide_indices,
        vertices,
        roots,
    })
}

/// Read one guide record, keeping every `step`-th line up to the per-strand
/// vertex count.
fn sample_strand<R: BufRead>(
    lines: &mut LineReader<R>,
    record: usize,
    step: usize,
    config: &ConvertConfig,
    out: &mut Vec<Vertex>,
) -> Result<()> {
    let mut taken = 0;
    for j in 0..config.lines_per_strand {
        let (line_no, line) = lines.next_line()?;
        if !keeps_line(j, step, taken, config.vertices_per_strand) {
            continue;
        }
        let vertex = parse_vertex_line(line, line_no)?;
        trace!(strand = record, line = j, "kept vertex");
        out.push(vertex);
        taken += 1;
    }
    if taken != config.vertices_per_strand {
        return Err(ConvertError::Config(format!(
            "strand {} yielded {} vertices with step {}, expected {}",
            record, taken, step, config.vertices_per_strand
        )));
    }
    Ok(())
}
