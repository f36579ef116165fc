//! Binary serialization for HairGL assets (`.hgl`)
//!
//! Layout, no padding, no magic or version field:
//!
//! | offset | field | type |
//! |--------|-------|------|
//! | 0  | guides_count | i32 |
//! | 4  | segments_count (vertices per strand - 1) | i32 |
//! | 8  | triangles_count | i32 |
//! | 12 | vertices: guides_count * (segments_count + 1) x (x, y, z) | f32 |
//! | .. | triangles: triangles_count x (i0, i1, i2) | i32 |
//!
//! Every field uses the same byte order, chosen by [`ByteOrder`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, LittleEndian, NativeEndian, ReadBytesExt, WriteBytesExt};

use super::types::{HairAsset, Triangle, Vertex};
use crate::config::ByteOrder;
use crate::error::{ConvertError, Result};

/// Size of the three-integer header in bytes
pub const HEADER_SIZE: usize = 12;

/// The three counts at the start of every `.hgl` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HglHeader {
    pub guides_count: i32,
    pub segments_count: i32,
    pub triangles_count: i32,
}

impl HglHeader {
    pub fn for_asset(asset: &HairAsset) -> Result<Self> {
        Ok(HglHeader {
            guides_count: header_count("guides_count", asset.guides_count())?,
            segments_count: header_count("segments_count", asset.segments_count())?,
            triangles_count: header_count("triangles_count", asset.triangles_count())?,
        })
    }

    /// Vertices the header declares
    pub fn vertex_count(&self) -> usize {
        self.guides_count as usize * (self.segments_count as usize + 1)
    }

    /// Total file size the header implies
    pub fn file_len(&self) -> usize {
        HEADER_SIZE + self.vertex_count() * 12 + self.triangles_count as usize * 12
    }
}

fn header_count(name: &str, value: usize) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| ConvertError::Config(format!("{} = {} does not fit in an i32", name, value)))
}

impl HairAsset {
    /// Serialize to an in-memory `.hgl` image
    pub fn to_bytes(&self, order: ByteOrder) -> Result<Vec<u8>> {
        let header = HglHeader::for_asset(self)?;
        let mut buffer = Vec::with_capacity(header.file_len());
        self.write_to(&mut buffer, order)?;
        Ok(buffer)
    }

    /// Write header, vertices, then triangles
    pub fn write_to<W: Write>(&self, writer: &mut W, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::Native => write_asset::<NativeEndian, W>(self, writer),
            ByteOrder::Little => write_asset::<LittleEndian, W>(self, writer),
            ByteOrder::Big => write_asset::<BigEndian, W>(self, writer),
        }
    }

    /// Decode an asset, validating counts and triangle indices
    pub fn read_from<R: Read>(reader: &mut R, order: ByteOrder) -> Result<HairAsset> {
        match order {
            ByteOrder::Native => read_asset::<NativeEndian, R>(reader),
            ByteOrder::Little => read_asset::<LittleEndian, R>(reader),
            ByteOrder::Big => read_asset::<BigEndian, R>(reader),
        }
    }
}

fn write_asset<E: byteorder::ByteOrder, W: Write>(asset: &HairAsset, w: &mut W) -> Result<()> {
    let header = HglHeader::for_asset(asset)?;
    w.write_i32::<E>(header.guides_count)?;
    w.write_i32::<E>(header.segments_count)?;
    w.write_i32::<E>(header.triangles_count)?;

    for v in &asset.vertices {
        w.write_f32::<E>(v.x)?;
        w.write_f32::<E>(v.y)?;
        w.write_f32::<E>(v.z)?;
    }

    for tri in &asset.triangles {
        for idx in tri.indices() {
            w.write_i32::<E>(idx as i32)?;
        }
    }
    Ok(())
}

fn read_asset<E: byteorder::ByteOrder, R: Read>(r: &mut R) -> Result<HairAsset> {
    let header = HglHeader {
        guides_count: r.read_i32::<E>().map_err(truncated("header"))?,
        segments_count: r.read_i32::<E>().map_err(truncated("header"))?,
        triangles_count: r.read_i32::<E>().map_err(truncated("header"))?,
    };
    if header.guides_count < 0 || header.segments_count < 0 || header.triangles_count < 0 {
        return Err(ConvertError::Format(format!(
            "negative count in header {:?} (wrong byte order?)",
            header
        )));
    }

    let vertex_count = header.vertex_count();
    let mut vertices = Vec::with_capacity(vertex_count.min(1 << 20));
    for _ in 0..vertex_count {
        let x = r.read_f32::<E>().map_err(truncated("vertex data"))?;
        let y = r.read_f32::<E>().map_err(truncated("vertex data"))?;
        let z = r.read_f32::<E>().map_err(truncated("vertex data"))?;
        vertices.push(Vertex::new(x, y, z));
    }

    let guides = header.guides_count as u32;
    let mut triangles = Vec::with_capacity((header.triangles_count as usize).min(1 << 20));
    for t in 0..header.triangles_count {
        let mut indices = [0u32; 3];
        for slot in &mut indices {
            let idx = r.read_i32::<E>().map_err(truncated("triangle data"))?;
            if idx < 0 || idx as u32 >= guides {
                return Err(ConvertError::Format(format!(
                    "triangle {} references root {} but only {} guides exist",
                    t, idx, guides
                )));
            }
            *slot = idx as u32;
        }
        triangles.push(Triangle(indices));
    }

    let mut probe = [0u8; 1];
    if r.read(&mut probe)? != 0 {
        return Err(ConvertError::Format(
            "trailing bytes after triangle data".to_string(),
        ));
    }

    Ok(HairAsset::new(
        header.segments_count as usize + 1,
        vertices,
        triangles,
    ))
}

fn truncated(section: &'static str) -> impl Fn(std::io::Error) -> ConvertError {
    move |e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            ConvertError::Format(format!("file ends inside {}", section))
        } else {
            ConvertError::Io(e)
        }
    }
}

/// Write an asset to a `.hgl` file, replacing any existing file
pub fn write_hgl_file<P: AsRef<Path>>(asset: &HairAsset, path: P, order: ByteOrder) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    asset.write_to(&mut writer, order)?;
    writer.flush()?;
    Ok(())
}

/// Read a `.hgl` file written with the given byte order
pub fn read_hgl_file<P: AsRef<Path>>(path: P, order: ByteOrder) -> Result<HairAsset> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    HairAsset::read_from(&mut reader, order)
}
