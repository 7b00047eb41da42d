//! Geometry for the grid-and-spotlight background layer.

pub const GRID_CELL_PX: f32 = 50.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const GRID_BASE_ALPHA: f32 = 0.05;
pub const GRID_BRIGHT_ALPHA: f32 = 0.10;
pub const SPOTLIGHT_RADIUS: f32 = 150.0;
/// Fraction of the surface half-diagonal where the edge fade reaches zero.
pub const EDGE_FADE_INNER_FRAC: f32 = 0.01;

/// Positions of grid lines (multiples of the cell size) across an extent.
pub fn grid_line_positions(extent: f32) -> Vec<f32> {
    let mut positions = Vec::new();
    if extent <= 0.0 {
        return positions;
    }
    let mut at = 0.0;
    while at <= extent {
        positions.push(at);
        at += GRID_CELL_PX;
    }
    positions
}

/// Contiguous slice of sorted line positions intersecting the spotlight
/// circle's bounding band around `center`. Only these need the bright pass.
pub fn spotlight_band(positions: &[f32], center: f32, radius: f32) -> &[f32] {
    let reach = radius + GRID_LINE_WIDTH;
    let start = positions.partition_point(|&p| p < center - reach);
    let end = positions.partition_point(|&p| p <= center + reach);
    &positions[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_cover_extent() {
        let positions = grid_line_positions(220.0);
        assert_eq!(positions, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert!(grid_line_positions(0.0).is_empty());
    }

    #[test]
    fn band_culls_far_lines() {
        let positions = grid_line_positions(1000.0);
        let band = spotlight_band(&positions, 500.0, 150.0);
        assert_eq!(band, &[350.0, 400.0, 450.0, 500.0, 550.0, 600.0, 650.0]);
    }

    #[test]
    fn band_at_edge_is_clipped() {
        let positions = grid_line_positions(300.0);
        let band = spotlight_band(&positions, 0.0, 150.0);
        assert_eq!(band, &[0.0, 50.0, 100.0, 150.0]);
    }
}
