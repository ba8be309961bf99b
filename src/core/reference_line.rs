use crate::error::IndicatorResult;
use crate::render::DrawSurface;

/// Dash pattern used for the mid/zero reference line.
const REFERENCE_DASH: [f64; 1] = [3.0];

/// Snaps a device-space ordinate to the nearest pixel, shifted by the
/// fractional half-stroke so odd-width lines land on pixel centers and stay
/// crisp.
#[must_use]
pub fn snap_to_pixel(y: f64, line_width: f64, device_pixel_ratio: f64) -> f64 {
    let pixel_adjust = (line_width * device_pixel_ratio / 2.0).fract();
    y.round() - pixel_adjust
}

/// Draws one horizontal reference line from `x = 0` to `x = width` at `y`.
///
/// Dashed mode restores the surface's previous dash pattern afterwards so the
/// dash state never leaks into subsequent draws.
pub fn draw_reference_line<S: DrawSurface + ?Sized>(
    surface: &mut S,
    width: f64,
    y: f64,
    dashed: bool,
) -> IndicatorResult<()> {
    surface.begin_path();
    surface.move_to(0.0, y);
    surface.line_to(width, y);
    surface.close_path();

    if dashed {
        let previous = surface.dash_pattern();
        surface.set_dash_pattern(&REFERENCE_DASH);
        surface.stroke()?;
        surface.set_dash_pattern(&previous);
    } else {
        surface.stroke()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_keeps_one_pixel_lines_on_half_pixel_centers() {
        // 1px stroke at dpr 1: adjust = fract(0.5) = 0.5.
        assert_eq!(snap_to_pixel(10.2, 1.0, 1.0), 9.5);
        // 2px stroke at dpr 1: adjust = fract(1.0) = 0, whole-pixel boundary.
        assert_eq!(snap_to_pixel(10.2, 2.0, 1.0), 10.0);
        // 1px stroke at dpr 2: adjust = fract(1.0) = 0.
        assert_eq!(snap_to_pixel(10.6, 1.0, 2.0), 11.0);
    }
}
