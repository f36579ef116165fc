//! Growth mesh triangulation
//!
//! The HairGL renderer interpolates extra strands across triangles spanned by
//! guide roots. Those triangles come from a 2D Delaunay triangulation of the
//! roots' XY projection. Triangle indices refer to root order, which is also
//! guide strand order in the vertex buffer.

use spade::{DelaunayTriangulation, Point2, Triangulation};

use crate::error::{ConvertError, Result};
use crate::hair::{RootPoint, Triangle};

/// Delaunay-triangulate root points.
///
/// Triangles are counter-clockwise. Fails when fewer than three roots are
/// given, when all roots are collinear, or when two roots coincide (the
/// duplicate would have no vertex of its own and shift every later index).
pub fn triangulate_roots(roots: &[RootPoint]) -> Result<Vec<Triangle>> {
    if roots.len() < 3 {
        return Err(ConvertError::Geometry(format!(
            "{} root point(s), at least 3 are needed to triangulate",
            roots.len()
        )));
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for (k, root) in roots.iter().enumerate() {
        let handle = triangulation
            .insert(Point2::new(root.x as f64, root.y as f64))
            .map_err(|e| {
                ConvertError::Geometry(format!(
                    "root {} at ({}, {}) rejected: {:?}",
                    k, root.x, root.y, e
                ))
            })?;
        if handle.index() != k {
            return Err(ConvertError::Geometry(format!(
                "root {} at ({}, {}) coincides with root {}",
                k,
                root.x,
                root.y,
                handle.index()
            )));
        }
    }

    if triangulation.num_inner_faces() == 0 {
        return Err(ConvertError::Geometry(format!(
            "all {} root points are collinear",
            roots.len()
        )));
    }

    let triangles = triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.vertices();
            Triangle([
                a.fix().index() as u32,
                b.fix().index() as u32,
                c.fix().index() as u32,
            ])
        })
        .collect();
    Ok(triangles)
}
