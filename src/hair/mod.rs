//! Hair asset module
//!
//! In-memory representation of a converted hair asset and its two on-disk
//! forms.
//!
//! # Submodules
//! - `types` - Vertices, root points, triangles and the `HairAsset` aggregate
//! - `binary` - `.hgl` encoder/decoder for the HairGL loader
//! - `mirror` - OBJ-style text mirror for visual inspection

mod types;
mod binary;
mod mirror;

pub use types::{
    Vertex,
    RootPoint,
    Triangle,
    Bounds,
    HairAsset,
};

pub use binary::{
    HEADER_SIZE,
    HglHeader,
    write_hgl_file,
    read_hgl_file,
};

pub use mirror::{
    write_mirror,
    write_mirror_file,
    mirror_to_string,
};
