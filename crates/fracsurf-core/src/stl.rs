//! ASCII STL export of a height grid.
//!
//! Two triangles per grid cell, vertices centred on the domain, facet
//! normals from the (unnormalised) cross product of two edges.
use std::io::{self, Write};

use crate::grid::Grid;

type Vertex = [f64; 3];

/// `(p2 − p1) × (p3 − p1)`.
fn facet_normal(p1: Vertex, p2: Vertex, p3: Vertex) -> Vertex {
    let (ux, uy, uz) = (p2[0] - p1[0], p2[1] - p1[1], p2[2] - p1[2]);
    let (vx, vy, vz) = (p3[0] - p1[0], p3[1] - p1[1], p3[2] - p1[2]);
    [uy * vz - uz * vy, uz * vx - ux * vz, ux * vy - uy * vx]
}

fn write_facet<W: Write>(w: &mut W, p1: Vertex, p2: Vertex, p3: Vertex) -> io::Result<()> {
    let n = facet_normal(p1, p2, p3);
    writeln!(w, "  facet normal {} {} {}", n[0], n[1], n[2])?;
    writeln!(w, "    outer loop")?;
    for p in [p1, p2, p3] {
        writeln!(w, "      vertex {} {} {}", p[0], p[1], p[2])?;
    }
    writeln!(w, "    endloop")?;
    writeln!(w, "  endfacet")
}

/// Write `z` as an ASCII STL solid spanning `lx × ly`.
///
/// Grid spacing is `lx / (nx − 1)` by `ly / (ny − 1)`; `x, y` are offset by
/// `−lx/2, −ly/2`.  Grids narrower than two cells on either axis produce an
/// empty solid.  No newline follows `endsolid`.
pub fn write_ascii_stl<W: Write>(w: &mut W, z: &Grid, lx: f64, ly: f64, name: &str) -> io::Result<()> {
    writeln!(w, "solid {name}")?;
    if z.nx >= 2 && z.ny >= 2 {
        let dx = lx / (z.nx - 1) as f64;
        let dy = ly / (z.ny - 1) as f64;
        for j in 0..z.ny - 1 {
            for i in 0..z.nx - 1 {
                let x0 = i as f64 * dx - lx / 2.0;
                let x1 = (i + 1) as f64 * dx - lx / 2.0;
                let y0 = j as f64 * dy - ly / 2.0;
                let y1 = (j + 1) as f64 * dy - ly / 2.0;
                let p00 = [x0, y0, z.get(j, i)];
                let p10 = [x1, y0, z.get(j, i + 1)];
                let p01 = [x0, y1, z.get(j + 1, i)];
                let p11 = [x1, y1, z.get(j + 1, i + 1)];
                write_facet(w, p00, p10, p11)?;
                write_facet(w, p00, p11, p01)?;
            }
        }
    }
    write!(w, "endsolid {name}")
}

/// In-memory variant of [`write_ascii_stl`].
pub fn to_ascii_stl(z: &Grid, lx: f64, ly: f64, name: &str) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_ascii_stl(&mut buf, z, lx, ly, name);
    String::from_utf8_lossy(&buf).into_owned()
}
