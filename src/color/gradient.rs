use crate::color::Hsl;

/// Number of stops in the rainbow rendered on the strip
pub const RAINBOW_STEPS: usize = 4;

/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueDirection {
    Clockwise,
    CounterClockwise,
    /// Whichever way around the wheel is shorter
    Shortest,
}

/// Interpolate `STEPS` HSL stops between `start` and `end`
///
/// Values are stepped in hundredths so integer division keeps some
/// precision. The first stop is exactly `start` and the last one exactly
/// `end`. Intermediate hues carry a `+360` offset; the color model
/// normalizes them. Any `i32` input is accepted: math runs in `i64` and a
/// hue that no longer fits is reduced modulo 360.
#[allow(clippy::cast_possible_wrap)]
pub fn hsl_gradient<const STEPS: usize>(
    start: Hsl,
    end: Hsl,
    direction: HueDirection,
) -> [Hsl; STEPS] {
    if STEPS == 0 {
        return [start; STEPS];
    }
    let steps = STEPS as i64;

    let start_hue = i64::from(start.hue);
    let end_hue = i64::from(end.hue);
    let distance_cw = (end_hue + 360 - start_hue).rem_euclid(360);
    let distance_ccw = (start_hue + 360 - end_hue).rem_euclid(360);
    let step_cw = (distance_cw * 100) / steps;
    let step_ccw = -(distance_ccw * 100) / steps;

    let hue_step = match direction {
        HueDirection::Clockwise => step_cw,
        HueDirection::CounterClockwise => step_ccw,
        HueDirection::Shortest => {
            if distance_cw < distance_ccw {
                step_cw
            } else {
                step_ccw
            }
        }
    };
    let start_saturation = i64::from(start.saturation);
    let start_luminance = i64::from(start.luminance);
    let saturation_step = ((i64::from(end.saturation) - start_saturation) * 100) / steps;
    let luminance_step = ((i64::from(end.luminance) - start_luminance) * 100) / steps;

    if STEPS == 1 {
        // Hue keeps its hundredths step; saturation and luminance move by
        // the whole distance
        return [Hsl::new(
            narrow_hue(start_hue + hue_step),
            narrow_percent(start_saturation + saturation_step / 100),
            narrow_percent(start_luminance + luminance_step / 100),
        ); STEPS];
    }

    core::array::from_fn(|i| {
        if i == 0 {
            return start;
        }
        if i == STEPS - 1 {
            return end;
        }
        let i = i as i64;
        Hsl::new(
            narrow_hue((start_hue * 100 + i * hue_step) / 100 + 360),
            narrow_percent((start_saturation * 100 + i * saturation_step) / 100),
            narrow_percent((start_luminance * 100 + i * luminance_step) / 100),
        )
    })
}

/// Keep the hue as is when it fits, otherwise an equivalent angle
#[allow(clippy::cast_possible_truncation)]
fn narrow_hue(hue: i64) -> i32 {
    i32::try_from(hue).unwrap_or((hue.rem_euclid(360) + 360) as i32)
}

/// Percentages clamp to `0..=99` later, so saturating is lossless
#[allow(clippy::cast_possible_truncation)]
const fn narrow_percent(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}
