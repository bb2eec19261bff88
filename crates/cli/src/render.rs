//! SVG plot of a cycle, drawn with `plotters`.
//!
//! Row 0 is at the top. Cells are dots on a light lattice and tour edges are
//! straight strokes between cell centres. A seam edge (one that wraps from the
//! last column to the first) would otherwise cross the whole picture, so it is
//! drawn as two half-segments leaving the grid through the left and right
//! borders.

use anyhow::{Context, Result};
use hamcycle::{Cell, Cycle};
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const CELL_PX: u32 = 24;
const LATTICE: RGBColor = RGBColor(221, 221, 221);
const BORDER: RGBColor = RGBColor(153, 153, 153);
const EDGE: RGBColor = RGBColor(31, 119, 180);
const SEAM: RGBColor = RGBColor(255, 127, 14);

/// Plot coordinates: x to the right, y negated so row 0 ends up on top.
fn point(c: Cell) -> (f64, f64) {
    (c.x as f64, -(c.y as f64))
}

pub fn write_svg(cycle: &Cycle, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating image dir {}", parent.display()))?;
        }
    }
    let (w, h) = (cycle.width(), cycle.height());
    let size = (w as u32 * CELL_PX + 60, h as u32 * CELL_PX + 80);
    let (left, right) = (-0.5, w as f64 - 0.5);
    let (bottom, top) = (-(h as f64) + 0.5, 0.5);

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("drawing {}", path.display()))?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Hamiltonian cycle on {w}x{h} cylindrical grid"),
            ("sans-serif", 16),
        )
        .margin(10)
        .build_cartesian_2d(left..right, bottom..top)
        .with_context(|| format!("laying out {}", path.display()))?;

    let lattice = (0..w)
        .map(|x| vec![(x as f64, bottom), (x as f64, top)])
        .chain((0..h).map(|y| vec![(left, -(y as f64)), (right, -(y as f64))]))
        .map(|pts| PathElement::new(pts, LATTICE.stroke_width(1)));
    chart.draw_series(lattice)?;
    chart.draw_series([left, right].map(|x| {
        PathElement::new(vec![(x, bottom), (x, top)], BORDER.stroke_width(1))
    }))?;

    let mut strokes = Vec::with_capacity(cycle.len() + 1);
    let mut seams = Vec::new();
    for edge in cycle.edges() {
        if edge.is_seam(w) {
            let (last, first) = if edge.a.x == w - 1 {
                (edge.a, edge.b)
            } else {
                (edge.b, edge.a)
            };
            let (lx, ly) = point(last);
            let (fx, fy) = point(first);
            seams.push(vec![(lx, ly), (right, ly)]);
            seams.push(vec![(left, fy), (fx, fy)]);
        } else {
            strokes.push(vec![point(edge.a), point(edge.b)]);
        }
    }
    chart.draw_series(
        strokes
            .into_iter()
            .map(|pts| PathElement::new(pts, EDGE.stroke_width(2))),
    )?;
    chart.draw_series(
        seams
            .into_iter()
            .map(|pts| PathElement::new(pts, SEAM.stroke_width(2))),
    )?;
    chart.draw_series(
        cycle
            .path()
            .iter()
            .map(|&c| Circle::new(point(c), 3, EDGE.filled())),
    )?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamcycle::prelude::*;
    use tempfile::tempdir;

    /// Number of `<tag ...>` elements whose attributes mention `color`.
    fn count_tagged(svg: &str, tag: &str, color: RGBColor) -> usize {
        let RGBColor(r, g, b) = color;
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        svg.to_lowercase()
            .split('<')
            .filter(|el| el.starts_with(tag) && el.contains(&hex))
            .count()
    }

    fn plot(cycle: &Cycle) -> String {
        let dir = tempdir().unwrap();
        let file = dir.path().join("c.svg");
        write_svg(cycle, &file).unwrap();
        fs::read_to_string(&file).unwrap()
    }

    #[test]
    fn serpentine_closing_edge_is_split_at_both_borders() {
        let svg = plot(&serpentine(4, 4, &mut NoProgress).unwrap());
        // 16 edges: one seam (two halves) and fifteen straight strokes.
        assert_eq!(count_tagged(&svg, "polyline", SEAM), 2);
        assert_eq!(count_tagged(&svg, "polyline", EDGE), 15);
        assert_eq!(svg.matches("<circle").count(), 16);
        assert!(svg.contains("4x4 cylindrical grid"));
    }

    #[test]
    fn narrow_grid_has_no_seam() {
        let svg = plot(&serpentine(2, 4, &mut NoProgress).unwrap());
        assert_eq!(count_tagged(&svg, "polyline", SEAM), 0);
        assert_eq!(count_tagged(&svg, "polyline", EDGE), 8);
    }

    #[test]
    fn write_svg_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plots/c.svg");
        let cycle = serpentine(6, 2, &mut NoProgress).unwrap();
        write_svg(&cycle, &file).unwrap();
        let text = fs::read_to_string(&file).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.trim_end().ends_with("</svg>"));
    }
}
