//! Core hair asset types
//!
//! Vertices are stored strand-major in one flat sequence: strand `k` owns
//! `vertices[k * vertices_per_strand .. (k + 1) * vertices_per_strand]`.
//! Triangles index strands (root points), not individual vertices.

use serde::Serialize;

/// A strand vertex position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vertex { x, y, z }
    }

    /// XY projection used for root triangulation
    pub fn root_point(&self) -> RootPoint {
        RootPoint {
            x: self.x,
            y: self.y,
        }
    }
}

/// Root of a guide strand projected onto the XY plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootPoint {
    pub x: f32,
    pub y: f32,
}

/// Three root-point (guide strand) indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }
}

/// Axis-aligned bounding box of all vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Guide strands plus the growth mesh triangulated over their roots
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HairAsset {
    pub vertices_per_strand: usize,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl HairAsset {
    pub fn new(vertices_per_strand: usize, vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        HairAsset {
            vertices_per_strand,
            vertices,
            triangles,
        }
    }

    pub fn guides_count(&self) -> usize {
        if self.vertices_per_strand == 0 {
            0
        } else {
            self.vertices.len() / self.vertices_per_strand
        }
    }

    pub fn segments_count(&self) -> usize {
        self.vertices_per_strand.saturating_sub(1)
    }

    pub fn triangles_count(&self) -> usize {
        self.triangles.len()
    }

    /// Vertices of guide strand `k`, root first
    pub fn strand(&self, k: usize) -> Option<&[Vertex]> {
        let start = k.checked_mul(self.vertices_per_strand)?;
        let end = start.checked_add(self.vertices_per_strand)?;
        self.vertices.get(start..end)
    }

    pub fn strands(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(self.vertices_per_strand.max(1))
    }

    /// First vertex of every strand, projected to XY
    pub fn roots(&self) -> Vec<RootPoint> {
        self.strands().map(|s| s[0].root_point()).collect()
    }

    /// Bounding box, or `None` for an empty asset
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?;
        let mut min = [first.x, first.y, first.z];
        let mut max = min;
        for v in &self.vertices[1..] {
            for (axis, value) in [v.x, v.y, v.z].into_iter().enumerate() {
                min[axis] = min[axis].min(value);
                max[axis] = max[axis].max(value);
            }
        }
        Some(Bounds { min, max })
    }
}
