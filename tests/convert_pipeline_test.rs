// End-to-end conversion of a synthetic 901 x 100 strand export
use hairgl_asset::{convert, read_hgl_file, ByteOrder, ConvertConfig, ConvertError, Vertex};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Strand `i`, line `j` sits at (i, i*i, j): roots lie on a parabola, so any
/// guide subset is in convex position and triangulates into `guides - 2`
/// triangles.
fn write_strand_file(dir: &Path, strands: usize) -> PathBuf {
    let mut text = String::with_capacity(strands * 100 * 16);
    for i in 0..strands {
        for j in 0..100 {
            text.push_str(&format!("v {} {} {}\n", i, i * i, j));
        }
    }
    let path = dir.join("hair.obj");
    fs::write(&path, text).expect("Failed to write strand file");
    path
}

struct Outputs {
    _dir: TempDir,
    input: PathBuf,
    hgl: PathBuf,
    obj: PathBuf,
}

fn setup() -> Outputs {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_strand_file(dir.path(), 901);
    let hgl = dir.path().join("hair.hgl");
    let obj = dir.path().join("hair_guides.obj");
    Outputs {
        _dir: dir,
        input,
        hgl,
        obj,
    }
}

fn header(bytes: &[u8]) -> [i32; 3] {
    [
        i32::from_ne_bytes(bytes[0..4].try_into().unwrap()),
        i32::from_ne_bytes(bytes[4..8].try_into().unwrap()),
        i32::from_ne_bytes(bytes[8..12].try_into().unwrap()),
    ]
}

#[test]
fn test_four_guides_header_and_vertices() {
    let out = setup();
    let config = ConvertConfig::new(4, 4);
    let report = convert(&config, &out.input, &out.hgl, &out.obj).expect("conversion failed");

    assert_eq!(report.guide_indices, vec![0, 225, 450, 675]);
    assert_eq!(report.step_size, 25);
    assert_eq!(report.triangles_count, 2);

    let bytes = fs::read(&out.hgl).unwrap();
    assert_eq!(header(&bytes), [4, 3, 2]);
    assert_eq!(bytes.len(), 12 + 16 * 12 + 2 * 12);

    let asset = read_hgl_file(&out.hgl, ByteOrder::Native).unwrap();
    let strand = asset.strand(1).unwrap();
    assert_eq!(
        strand,
        &[
            Vertex::new(225.0, 50625.0, 0.0),
            Vertex::new(225.0, 50625.0, 25.0),
            Vertex::new(225.0, 50625.0, 50.0),
            Vertex::new(225.0, 50625.0, 75.0),
        ]
    );
    for t in &asset.triangles {
        assert!(t.indices().iter().all(|&i| i < 4));
    }
    println!("✓ header {:?}, {} triangles", header(&bytes), asset.triangles.len());
}

#[test]
fn test_binary_round_trip_matches_report() {
    let out = setup();
    let config = ConvertConfig::default();
    let report = convert(&config, &out.input, &out.hgl, &out.obj).unwrap();

    let asset = read_hgl_file(&out.hgl, ByteOrder::Native).unwrap();
    assert_eq!(asset.guides_count(), 50);
    assert_eq!(asset.segments_count(), 19);
    assert_eq!(asset.vertices.len(), report.vertex_count);
    assert_eq!(asset.triangles_count(), 48);
    assert_eq!(asset.triangles_count(), report.triangles_count);

    // every strand's root is the first line of its guide record
    for (k, &record) in report.guide_indices.iter().enumerate() {
        let root = asset.strand(k).unwrap()[0];
        assert_eq!(root, Vertex::new(record as f32, (record * record) as f32, 0.0));
    }
}

#[test]
fn test_mirror_matches_binary() {
    let out = setup();
    let config = ConvertConfig::new(10, 5);
    convert(&config, &out.input, &out.hgl, &out.obj).unwrap();

    let asset = read_hgl_file(&out.hgl, ByteOrder::Native).unwrap();
    let text = fs::read_to_string(&out.obj).unwrap();
    let v_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("v ")).collect();
    let l_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("l ")).collect();

    assert_eq!(v_lines.len(), asset.vertices.len());
    assert_eq!(l_lines.len(), 10);
    assert_eq!(v_lines[1], "v 0 0 20");

    let mut expected = 1;
    for line in &l_lines {
        let indices: Vec<usize> = line[2..]
            .split(' ')
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(indices.len(), 5);
        for idx in indices {
            assert_eq!(idx, expected);
            expected += 1;
        }
    }
    assert_eq!(expected - 1, asset.vertices.len());
}

#[test]
fn test_every_line_at_full_density() {
    let out = setup();
    let config = ConvertConfig::new(3, 100);
    let report = convert(&config, &out.input, &out.hgl, &out.obj).unwrap();
    assert_eq!(report.step_size, 1);
    assert_eq!(report.vertex_count, 300);
    assert_eq!(report.triangles_count, 1);

    let asset = read_hgl_file(&out.hgl, ByteOrder::Native).unwrap();
    let zs: Vec<f32> = asset.strand(2).unwrap().iter().map(|v| v.z).collect();
    assert_eq!(zs, (0..100).map(|j| j as f32).collect::<Vec<_>>());
}

#[test]
fn test_two_guides_fail_triangulation_without_outputs() {
    let out = setup();
    let config = ConvertConfig::new(2, 4);
    let err = convert(&config, &out.input, &out.hgl, &out.obj).unwrap_err();
    assert!(matches!(err, ConvertError::Geometry(_)), "got {:?}", err);
    assert!(!out.hgl.exists());
    assert!(!out.obj.exists());
}

#[test]
fn test_single_guide_is_a_geometry_error() {
    let out = setup();
    let err = convert(&ConvertConfig::new(1, 10), &out.input, &out.hgl, &out.obj).unwrap_err();
    assert!(matches!(err, ConvertError::Geometry(_)));
}

#[test]
fn test_truncated_input() {
    let dir = TempDir::new().unwrap();
    let input = write_strand_file(dir.path(), 900);
    let hgl = dir.path().join("out.hgl");
    let obj = dir.path().join("out.obj");
    let err = convert(&ConvertConfig::new(10, 10), &input, &hgl, &obj).unwrap_err();
    match err {
        ConvertError::TruncatedInput {
            lines_expected,
            lines_read,
        } => {
            assert_eq!(lines_expected, 90_100);
            assert_eq!(lines_read, 90_000);
        }
        other => panic!("expected truncated input, got {:?}", other),
    }
    assert!(!hgl.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = convert(
        &ConvertConfig::default(),
        dir.path().join("nope.obj"),
        dir.path().join("out.hgl"),
        dir.path().join("out.obj"),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)));
}

#[test]
fn test_conversion_is_idempotent() {
    let out = setup();
    let config = ConvertConfig::new(25, 10);
    convert(&config, &out.input, &out.hgl, &out.obj).unwrap();
    let first_hgl = fs::read(&out.hgl).unwrap();
    let first_obj = fs::read(&out.obj).unwrap();

    convert(&config, &out.input, &out.hgl, &out.obj).unwrap();
    assert_eq!(fs::read(&out.hgl).unwrap(), first_hgl);
    assert_eq!(fs::read(&out.obj).unwrap(), first_obj);
}

#[test]
fn test_little_endian_output() {
    let out = setup();
    let config = ConvertConfig {
        byte_order: ByteOrder::Little,
        ..ConvertConfig::new(5, 2)
    };
    convert(&config, &out.input, &out.hgl, &out.obj).unwrap();

    let bytes = fs::read(&out.hgl).unwrap();
    assert_eq!(&bytes[0..4], &5i32.to_le_bytes());
    assert_eq!(&bytes[4..8], &1i32.to_le_bytes());
    assert_eq!(&bytes[8..12], &3i32.to_le_bytes());

    let asset = read_hgl_file(&out.hgl, ByteOrder::Little).unwrap();
    assert_eq!(asset.guides_count(), 5);
}

#[test]
fn test_uneven_step_needs_opt_in() {
    let out = setup();
    let err = convert(&ConvertConfig::new(50, 16), &out.input, &out.hgl, &out.obj).unwrap_err();
    assert!(matches!(err, ConvertError::Config(_)));

    let config = ConvertConfig {
        allow_uneven_step: true,
        ..ConvertConfig::new(50, 16)
    };
    let report = convert(&config, &out.input, &out.hgl, &out.obj).unwrap();
    assert_eq!(report.step_size, 6);
    assert_eq!(report.segments_count, 15);

    let asset = read_hgl_file(&out.hgl, ByteOrder::Native).unwrap();
    let last = asset.strand(0).unwrap().last().unwrap();
    assert_eq!(last.z, 90.0);
}

fn fractional_coords(i: usize, j: usize) -> [f64; 3] {
    [i as f64 * 0.1 + 0.05, (i * i) as f64 * 0.001, j as f64 * 0.1]
}

/// Same parabola layout as `write_strand_file`, but with coordinates that are
/// not exactly representable as `f32`.
fn write_fractional_strand_file(dir: &Path) -> PathBuf {
    let mut text = String::new();
    for i in 0..901 {
        for j in 0..100 {
            let [x, y, z] = fractional_coords(i, j);
            text.push_str(&format!("v {} {} {}\n", x, y, z));
        }
    }
    let path = dir.join("hair_fractional.obj");
    fs::write(&path, text).expect("Failed to write strand file");
    path
}

#[test]
fn test_fractional_coordinates_round_trip_exactly() {
    let dir = TempDir::new().unwrap();
    let input = write_fractional_strand_file(dir.path());
    let hgl = dir.path().join("out.hgl");
    let obj = dir.path().join("out.obj");
    let report = convert(&ConvertConfig::new(4, 4), &input, &hgl, &obj).unwrap();

    let asset = read_hgl_file(&hgl, ByteOrder::Native).unwrap();
    for (k, &record) in report.guide_indices.iter().enumerate() {
        for (n, v) in asset.strand(k).unwrap().iter().enumerate() {
            let [x, y, z] = fractional_coords(record, n * report.step_size);
            assert_eq!(v.x.to_bits(), (x as f32).to_bits());
            assert_eq!(v.y.to_bits(), (y as f32).to_bits());
            assert_eq!(v.z.to_bits(), (z as f32).to_bits());
        }
    }

    let text = fs::read_to_string(&obj).unwrap();
    let mirrored: Vec<[f32; 3]> = text
        .lines()
        .filter(|l| l.starts_with("v "))
        .map(|l| {
            let mut fields = l[2..].split(' ').map(|s| s.parse::<f32>().unwrap());
            [
                fields.next().unwrap(),
                fields.next().unwrap(),
                fields.next().unwrap(),
            ]
        })
        .collect();
    assert_eq!(mirrored.len(), asset.vertices.len());
    for (m, v) in mirrored.iter().zip(&asset.vertices) {
        assert_eq!(m[0].to_bits(), v.x.to_bits());
        assert_eq!(m[1].to_bits(), v.y.to_bits());
        assert_eq!(m[2].to_bits(), v.z.to_bits());
    }
    println!("✓ {} fractional vertices match bit for bit", mirrored.len());
}
