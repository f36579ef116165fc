//! Strand file → HairGL asset conversion
//!
//! Single pass: sample guides, triangulate their roots, then write the `.hgl`
//! binary and the OBJ mirror. Both outputs are written only after
//! triangulation succeeds, so a bad input never touches the output paths.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::hair::{write_hgl_file, write_mirror_file, HairAsset};
use crate::parsing::{read_guide_strands, read_guide_strands_file, SampledStrands};
use crate::triangulation::triangulate_roots;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub guides_count: usize,
    pub segments_count: usize,
    pub triangles_count: usize,
    pub vertex_count: usize,
    pub step_size: usize,
    pub guide_indices: Vec<usize>,
}

impl ConversionReport {
    fn new(config: &ConvertConfig, guide_indices: Vec<usize>, asset: &HairAsset) -> Self {
        ConversionReport {
            guides_count: asset.guides_count(),
            segments_count: asset.segments_count(),
            triangles_count: asset.triangles_count(),
            vertex_count: asset.vertices.len(),
            step_size: config.step_size(),
            guide_indices,
        }
    }
}

/// Convert a strand file into a `.hgl` asset and its text mirror.
pub fn convert<P, Q, R>(
    config: &ConvertConfig,
    input_path: P,
    binary_output_path: Q,
    text_output_path: R,
) -> Result<ConversionReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let total_start = Instant::now();

    let parse_start = Instant::now();
    let strands = read_guide_strands_file(input_path.as_ref(), config)?;
    info!(
        input = %input_path.as_ref().display(),
        guides = strands.roots.len(),
        vertices = strands.vertices.len(),
        step = config.step_size(),
        "parsed strand file in {:.2}ms",
        parse_start.elapsed().as_secs_f64() * 1000.0
    );

    let (asset, guide_indices) = build_asset(config, strands)?;

    let write_start = Instant::now();
    write_hgl_file(&asset, binary_output_path.as_ref(), config.byte_order)?;
    write_mirror_file(&asset, text_output_path.as_ref())?;
    info!(
        hgl = %binary_output_path.as_ref().display(),
        obj = %text_output_path.as_ref().display(),
        "wrote outputs in {:.2}ms",
        write_start.elapsed().as_secs_f64() * 1000.0
    );

    let report = ConversionReport::new(config, guide_indices, &asset);
    info!(
        guides = report.guides_count,
        segments = report.segments_count,
        triangles = report.triangles_count,
        "conversion finished in {:.2}ms",
        total_start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(report)
}

/// Sample and triangulate from an in-memory reader without writing files.
pub fn convert_reader<B: BufRead>(config: &ConvertConfig, reader: B) -> Result<HairAsset> {
    let strands = read_guide_strands(reader, config)?;
    build_asset(config, strands).map(|(asset, _)| asset)
}

fn build_asset(config: &ConvertConfig, strands: SampledStrands) -> Result<(HairAsset, Vec<usize>)> {
    let tri_start = Instant::now();
    let triangles = triangulate_roots(&strands.roots)?;
    info!(
        roots = strands.roots.len(),
        triangles = triangles.len(),
        "triangulated roots in {:.2}ms",
        tri_start.elapsed().as_secs_f64() * 1000.0
    );

    let asset = HairAsset::new(config.vertices_per_strand, strands.vertices, triangles);
    Ok((asset, strands.guide_indices))
}
