//! Guide strand selection and per-strand sampling step

/// Strand indices kept as guides: `floor(i * span / guides_count)` for
/// `i in 0..guides_count`.
///
/// Integer arithmetic throughout, so the result is strictly increasing as
/// long as `guides_count <= span`. Larger counts produce repeated indices,
/// which `ConvertConfig::validate` rejects before any selection is built.
pub fn select_guide_indices(guides_count: usize, span: usize) -> Vec<usize> {
    if guides_count == 0 {
        return Vec::new();
    }
    (0..guides_count)
        .map(|i| (i as u128 * span as u128 / guides_count as u128) as usize)
        .collect()
}

/// Number of distinct values in a sorted index list
pub fn distinct_count(indices: &[usize]) -> usize {
    if indices.is_empty() {
        return 0;
    }
    1 + indices.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Lines between two sampled vertices: `lines_per_strand / vertices_per_strand`
pub fn step_size(lines_per_strand: usize, vertices_per_strand: usize) -> usize {
    lines_per_strand / vertices_per_strand.max(1)
}

/// Whether line `j` of a strand is kept, given `taken` vertices already kept
#[inline]
pub fn keeps_line(j: usize, step: usize, taken: usize, vertices_per_strand: usize) -> bool {
    step > 0 && j % step == 0 && taken < vertices_per_strand
}
