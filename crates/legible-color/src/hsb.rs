// SPDX-License-Identifier: MIT
//
// RGB ↔ HSB conversion.
//
// HSB (also called HSV) is the cylindrical view of the sRGB cube: hue is the
// angle around the gray axis, saturation is chroma relative to the brightest
// channel, brightness is the brightest channel itself. Hue is kept in [0, 1)
// rather than degrees so every component shares the same unit interval.
//
// Both directions are total. Black and grays have no defined hue; we pin
// hue and saturation to 0 there so the conversion never divides by zero.

/// Convert sRGB components (0.0–1.0) to hue, saturation, brightness.
///
/// Hue is returned in [0, 1). Saturation and hue are both 0 for black
/// (brightness 0) and for achromatic grays (all channels equal).
#[must_use]
#[allow(clippy::float_cmp)] // `max` is one of the channels, bit for bit.
pub fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let brightness = max;
    if max <= 0.0 || chroma <= 0.0 {
        return (0.0, 0.0, brightness);
    }

    let saturation = chroma / max;

    // Sector of the hexcone, in units of 60°.
    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    (normalize_hue(sector / 6.0), saturation, brightness)
}

/// Convert hue (any real, wrapped into [0, 1)), saturation and brightness to
/// sRGB components.
///
/// Inputs are not clamped: saturation or brightness outside [0, 1] produce
/// channels outside [0, 1].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }

    let h6 = normalize_hue(h) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    // `sector` is in [0, 6]; 6 only appears when h6 rounds up at the seam,
    // where f == 0 and sector 0 gives the same color.
    match (sector as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Wrap a hue into [0, 1).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid can land exactly on 1.0 for tiny negative inputs.
    if h >= 1.0 { 0.0 } else { h }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        let (ar, ag, ab) = actual;
        let (er, eg, eb) = expected;
        assert!(
            approx_eq(ar, er, 1e-9) && approx_eq(ag, eg, 1e-9) && approx_eq(ab, eb, 1e-9),
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn primaries_have_expected_hues() {
        let cases: [((f64, f64, f64), f64); 6] = [
            ((1.0, 0.0, 0.0), 0.0),       // Red
            ((1.0, 1.0, 0.0), 1.0 / 6.0), // Yellow
            ((0.0, 1.0, 0.0), 2.0 / 6.0), // Green
            ((0.0, 1.0, 1.0), 3.0 / 6.0), // Cyan
            ((0.0, 0.0, 1.0), 4.0 / 6.0), // Blue
            ((1.0, 0.0, 1.0), 5.0 / 6.0), // Magenta
        ];

        for ((r, g, b), hue) in cases {
            let (h, s, v) = rgb_to_hsb(r, g, b);
            assert!(approx_eq(h, hue, 1e-12), "Hue for ({r}, {g}, {b}): {h}");
            assert!(approx_eq(s, 1.0, 1e-12), "Saturation for ({r}, {g}, {b}): {s}");
            assert!(approx_eq(v, 1.0, 1e-12), "Brightness for ({r}, {g}, {b}): {v}");
        }
    }

    #[test]
    fn orange_hue_is_one_twelfth() {
        let (h, s, v) = rgb_to_hsb(1.0, 0.5, 0.0);
        assert!(approx_eq(h, 1.0 / 12.0, 1e-12), "Orange hue: {h}");
        assert!(approx_eq(s, 1.0, 1e-12));
        assert!(approx_eq(v, 1.0, 1e-12));
    }

    #[test]
    fn black_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsb(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsb(0.4, 0.4, 0.4), (0.0, 0.0, 0.4));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_rgb_close(hsb_to_rgb(0.7, 0.0, 0.3), (0.3, 0.3, 0.3));
    }

    #[test]
    fn hue_one_wraps_to_red() {
        assert_rgb_close(hsb_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb_close(hsb_to_rgb(-1.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn normalize_hue_wraps() {
        assert!(approx_eq(normalize_hue(1.25), 0.25, 1e-12));
        assert!(approx_eq(normalize_hue(-0.25), 0.75, 1e-12));
        assert!(normalize_hue(-1e-20) < 1.0);
    }

    // ── Properties ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn rgb_hsb_roundtrip(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (h, s, v) = rgb_to_hsb(r, g, b);
            let (rr, rg, rb) = hsb_to_rgb(h, s, v);
            prop_assert!((r - rr).abs() < 1e-6, "r: {} vs {}", r, rr);
            prop_assert!((g - rg).abs() < 1e-6, "g: {} vs {}", g, rg);
            prop_assert!((b - rb).abs() < 1e-6, "b: {} vs {}", b, rb);
        }

        #[test]
        fn hsb_components_stay_in_unit_range(
            r in 0.0f64..=1.0,
            g in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
        ) {
            let (h, s, v) = rgb_to_hsb(r, g, b);
            prop_assert!((0.0..1.0).contains(&h));
            prop_assert!((0.0..=1.0).contains(&s));
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn achromatic_inputs_roundtrip(level in 0.0f64..=1.0) {
            let (h, s, v) = rgb_to_hsb(level, level, level);
            prop_assert_eq!((h, s), (0.0, 0.0));
            prop_assert_eq!(hsb_to_rgb(h, s, v), (level, level, level));
        }
    }
}
