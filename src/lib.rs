//! Hair strand → HairGL asset converter
//!
//! Takes a strand mesh exported as text (fixed-size records of `tag x y z`
//! lines, one record per strand), keeps a spread of guide strands at reduced
//! vertex density, triangulates the guides' roots and writes:
//!
//! - a `.hgl` binary: three `i32` counts, the guide vertices as `f32`
//!   triples, then the root triangles as `i32` triples
//! - an OBJ-style mirror with `v` lines and one `l` polyline per guide
//!
//! ```no_run
//! use hairgl_asset::{convert, ConvertConfig};
//!
//! let config = ConvertConfig::new(50, 20);
//! let report = convert(&config, "hair10.obj", "hair.hgl", "hair_guides.obj")?;
//! println!("{} guides, {} triangles", report.guides_count, report.triangles_count);
//! # Ok::<(), hairgl_asset::ConvertError>(())
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod hair;
pub mod parsing;
pub mod triangulation;

pub use config::{ByteOrder, ConvertConfig};
pub use convert::{convert, convert_reader, ConversionReport};
pub use error::{ConvertError, Result};
pub use hair::{read_hgl_file, write_hgl_file, write_mirror_file, HairAsset, Triangle, Vertex};
pub use parsing::{read_guide_strands, read_guide_strands_file, SampledStrands};
pub use triangulation::triangulate_roots;
