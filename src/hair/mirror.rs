//! OBJ-style mirror of a hair asset for viewing the guides in a DCC tool.
//!
//! One `v x y z` line per vertex in binary order, then one `l` polyline per
//! guide strand listing its 1-based vertex indices.
//!
//! Coordinates are the stored `f32` values in shortest round-trip form, so
//! `0.123456789012` in the source file appears as `0.12345679`. The text can
//! differ from the source decimals but always parses back to the bits in the
//! `.hgl` file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::HairAsset;
use crate::error::Result;

/// Write the mirror text for `asset` into any writer
pub fn write_mirror<W: Write>(asset: &HairAsset, writer: &mut W) -> Result<()> {
    for v in &asset.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    let per_strand = asset.vertices_per_strand;
    for strand in 0..asset.guides_count() {
        write!(writer, "l")?;
        let first = strand * per_strand + 1;
        for idx in first..first + per_strand {
            write!(writer, " {}", idx)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the mirror to `path`, replacing any existing file
pub fn write_mirror_file<P: AsRef<Path>>(asset: &HairAsset, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_mirror(asset, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render the mirror into a string
pub fn mirror_to_string(asset: &HairAsset) -> String {
    let mut buffer = Vec::new();
    write_mirror(asset, &mut buffer).expect("Vec<u8> writes are infallible");
    String::from_utf8_lossy(&buffer).into_owned()
}
