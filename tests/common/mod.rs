//! Shared test utilities for dxf-records integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    let _ = std::fs::create_dir_all(&dir);
    dir.join(filename)
}

/// Leading boundary pairs of every layer state file
pub const LAS_HEADER: &str = "  0\nLAYERSTATEDICTIONARY\n  0\nLAYERSTATE\n";

/// Layer state file as written by a CAD application, including fields this
/// library does not keep (plot style, comments).
pub const SAMPLE_LAS: &str = "\
  0
LAYERSTATEDICTIONARY
  0
LAYERSTATE
  1
Electrical
 91
2047
301
Power and lighting
290
0
302
E-POWER
  8
0
 90
8
 62
7
370
-3
  6
Continuous
  2
Color_7
440
0
  8
E-POWER
 90
9
 62
1
370
35
  6
DASHED
  2
Color_1
440
33554559
  8
E-LIGHT
 90
10
 62
5
370
-3
  6
Continuous
440
0
 92
-1040187137
";

/// Build a drawing stream holding one hatch definition.
///
/// `lines` are `(angle, base x, base y, offset x, offset y, dashes)`.
pub fn hatch_drawing(name: &str, lines: &[(f64, f64, f64, f64, f64, &[f64])]) -> String {
    let mut dxf = String::from("  0\nSECTION\n  2\nENTITIES\n  0\nHATCH\n  5\n2A\n  8\n0\n");
    dxf.push_str(&format!("  2\n{}\n 70\n0\n 71\n0\n 75\n0\n 76\n1\n 52\n0.0\n 41\n1.0\n 77\n0\n", name));
    dxf.push_str(&format!(" 78\n{}\n", lines.len()));
    for (angle, bx, by, ox, oy, dashes) in lines {
        dxf.push_str(&format!(
            " 53\n{}\n 43\n{}\n 44\n{}\n 45\n{}\n 46\n{}\n 79\n{}\n",
            angle,
            bx,
            by,
            ox,
            oy,
            dashes.len()
        ));
        for dash in dashes.iter() {
            dxf.push_str(&format!(" 49\n{}\n", dash));
        }
    }
    dxf.push_str(" 98\n0\n  0\nENDSEC\n  0\nEOF\n");
    dxf
}
