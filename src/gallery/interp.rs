//! Scroll-scrubbed stage animation math.
//!
//! Everything here is pure and DOM-free: the adapter in [`super::stage`] reads
//! live geometry into a [`ScrollFrame`], calls [`compute`], and writes the
//! resulting [`VisualState`] back as inline styles. That split keeps the
//! interpolation testable on the host target.

/// Viewports at or below this width render the fixed, non-animated state.
pub const MOBILE_MAX_WIDTH: f64 = 767.0;

/// Ceiling on the end-of-animation scale so large boost values cannot blow
/// the image out of the viewport.
pub const END_SCALE_CAP: f64 = 1.8;

/// Initial zoom level of the stage image before any scrubbing.
pub const START_SCALE: f64 = 1.8;

/// Blur radius at progress 0, fading linearly to 0 at progress 1.
pub const MAX_BLUR: f64 = 24.0;

/// Geometry snapshot for one update. Rebuilt from the live DOM on every
/// scroll/resize/load event, never stored between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Pixel offset of the scrub container's start.
    pub top: f64,
    /// Total height of the scrub container.
    pub scrub_height: f64,
    /// Height of the sticky stage (~100vh).
    pub pin_height: f64,
    /// Dead-zone distance left after the animation completes.
    pub buffer: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Width of the wide reference card the end scale is derived from.
    pub wide_width: f64,
}

impl ScrollFrame {
    /// Scroll offset at which the animation reaches progress 1. The buffer
    /// stays after it so the stage rests briefly before unpinning.
    pub fn end(&self) -> f64 {
        self.top + (self.scrub_height - self.pin_height - self.buffer)
    }
}

/// Tuning knobs for the stage animation. `boost` and `overshoot` come from
/// the `--stage-boost` / `--stage-overshoot` custom properties on the stage
/// element; the rest are fixed design constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTuning {
    pub start_scale: f64,
    pub max_blur: f64,
    /// Multiplier on the computed end scale, default 1.
    pub boost: f64,
    /// Initial upward displacement in pixels, eased out as progress advances.
    pub overshoot: f64,
    /// Extra scale on the overlay video at progress 0, decaying to 1.
    pub video_boost: f64,
    pub overlay_max_opacity: f64,
    pub backdrop_max_blur: f64,
}

impl Default for StageTuning {
    fn default() -> Self {
        Self {
            start_scale: START_SCALE,
            max_blur: MAX_BLUR,
            boost: 1.0,
            overshoot: 0.0,
            video_boost: 1.05,
            overlay_max_opacity: 0.4,
            backdrop_max_blur: 8.0,
        }
    }
}

/// Derived per-frame style values. Write-only projection onto the DOM; no
/// identity beyond the current frame's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub scale: f64,
    /// Full-strength blur radius. The image gets half of it, the overlay
    /// video the full value.
    pub blur: f64,
    pub translate_y: f64,
    pub video_scale: f64,
    pub overlay_opacity: f64,
    pub backdrop_blur: f64,
    pub label_opacity: f64,
}

impl VisualState {
    /// Fixed state for narrow viewports: no scale, no blur, overlay and
    /// label hidden. A deliberate simplification, not a degraded fallback.
    pub fn mobile_static() -> Self {
        Self {
            scale: 1.0,
            blur: 0.0,
            translate_y: 0.0,
            video_scale: 1.0,
            overlay_opacity: 0.0,
            backdrop_blur: 0.0,
            label_opacity: 0.0,
        }
    }
}

/// Normalized scroll position within the active animation range, clamped to
/// [0, 1]. A degenerate range (`end <= top`) snaps to 0 below `top` and 1
/// past it instead of dividing by zero.
pub fn progress(frame: &ScrollFrame, scroll_y: f64) -> f64 {
    let end = frame.end();
    if end <= frame.top {
        return if scroll_y <= frame.top { 0.0 } else { 1.0 };
    }
    ((scroll_y - frame.top) / (end - frame.top)).clamp(0.0, 1.0)
}

/// Scale at progress 1: sizes the image to 120% of the wide reference card,
/// boosted, capped at [`END_SCALE_CAP`].
pub fn end_scale(frame: &ScrollFrame, tuning: &StageTuning) -> f64 {
    let vw = if frame.viewport_width > 0.0 {
        frame.viewport_width
    } else {
        1.0
    };
    (1.2 * frame.wide_width / vw * tuning.boost).min(END_SCALE_CAP)
}

/// One full interpolation pass. Idempotent: identical inputs yield identical
/// outputs.
pub fn compute(frame: &ScrollFrame, tuning: &StageTuning, scroll_y: f64) -> VisualState {
    if frame.viewport_width <= MOBILE_MAX_WIDTH {
        return VisualState::mobile_static();
    }

    let t = progress(frame, scroll_y);
    let end_scale = end_scale(frame, tuning);
    let scale = tuning.start_scale - (tuning.start_scale - end_scale) * t;
    let blur = tuning.max_blur * (1.0 - t);

    // Overshoot eases out linearly while the t² term blends toward the
    // position that vertically centers the scaled image at t = 1. The t²
    // curve is empirically tuned; keep it as-is.
    let centering = (frame.viewport_height - frame.pin_height * end_scale) / 2.0;
    let translate_y = -tuning.overshoot * (1.0 - t) + centering * t * t;

    VisualState {
        scale,
        blur,
        translate_y,
        video_scale: 1.0 + (tuning.video_boost - 1.0) * (1.0 - t),
        overlay_opacity: tuning.overlay_max_opacity * (1.0 - t),
        backdrop_blur: tuning.backdrop_max_blur * (1.0 - t),
        label_opacity: 1.0 - t,
    }
}

/// Parses the `--stage-boost` custom property. Empty or unparseable values
/// fall back to 1.
pub fn parse_boost(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|b| b.is_finite() && *b > 0.0)
        .unwrap_or(1.0)
}

/// Parses the `--stage-overshoot` custom property. Accepts `px` and `vh`
/// units ("120px", "20vh") or a bare number of pixels; anything else is 0.
pub fn parse_overshoot(raw: &str, viewport_height: f64) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    if let Some(vh) = raw.strip_suffix("vh") {
        return vh
            .trim()
            .parse::<f64>()
            .map(|v| v / 100.0 * viewport_height)
            .unwrap_or(0.0);
    }
    raw.strip_suffix("px")
        .unwrap_or(raw)
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ScrollFrame {
        ScrollFrame {
            top: 1000.0,
            scrub_height: 2200.0,
            pin_height: 900.0,
            buffer: 180.0,
            viewport_width: 1440.0,
            viewport_height: 900.0,
            wide_width: 1100.0,
        }
    }

    #[test]
    fn progress_is_clamped_for_all_offsets() {
        let f = frame();
        for y in [-5000.0, -1.0, 0.0, 999.0, 1000.0, 1500.0, 2120.0, 9999.0, 1e12] {
            let t = progress(&f, y);
            assert!((0.0..=1.0).contains(&t), "t={t} out of range at y={y}");
        }
    }

    #[test]
    fn progress_hits_endpoints_exactly() {
        let f = frame();
        // end = 1000 + (2200 - 900 - 180) = 2120
        assert_eq!(progress(&f, f.top), 0.0);
        assert_eq!(progress(&f, f.top - 1.0), 0.0);
        assert_eq!(progress(&f, f.end()), 1.0);
        assert_eq!(progress(&f, f.end() + 1.0), 1.0);
        assert!(progress(&f, f.top + 1.0) > 0.0);
        assert!(progress(&f, f.end() - 1.0) < 1.0);
    }

    #[test]
    fn degenerate_range_never_divides_by_zero() {
        let mut f = frame();
        f.scrub_height = f.pin_height + f.buffer; // end == top
        assert_eq!(progress(&f, f.top - 10.0), 0.0);
        assert_eq!(progress(&f, f.top), 0.0);
        assert_eq!(progress(&f, f.top + 10.0), 1.0);
    }

    #[test]
    fn scale_is_monotonically_non_increasing() {
        let f = frame();
        let tuning = StageTuning::default();
        let mut prev = f64::INFINITY;
        let mut y = f.top - 200.0;
        while y < f.end() + 200.0 {
            let s = compute(&f, &tuning, y).scale;
            assert!(s <= prev + 1e-12, "scale grew at y={y}");
            prev = s;
            y += 25.0;
        }
    }

    #[test]
    fn blur_fades_from_max_to_zero() {
        let f = frame();
        let tuning = StageTuning::default();
        assert_eq!(compute(&f, &tuning, f.top).blur, MAX_BLUR);
        assert_eq!(compute(&f, &tuning, f.end()).blur, 0.0);
    }

    #[test]
    fn boost_is_capped() {
        let f = frame();
        let tuning = StageTuning {
            boost: 50.0,
            ..StageTuning::default()
        };
        assert_eq!(end_scale(&f, &tuning), END_SCALE_CAP);
    }

    #[test]
    fn overshoot_eases_out_and_centering_takes_over() {
        let f = frame();
        let tuning = StageTuning {
            overshoot: 120.0,
            ..StageTuning::default()
        };
        let start = compute(&f, &tuning, f.top);
        assert_eq!(start.translate_y, -120.0);
        let end = compute(&f, &tuning, f.end());
        let centered = (f.viewport_height - f.pin_height * end_scale(&f, &tuning)) / 2.0;
        assert!((end.translate_y - centered).abs() < 1e-9);
    }

    #[test]
    fn video_scale_decays_to_one() {
        let f = frame();
        let tuning = StageTuning::default();
        assert!((compute(&f, &tuning, f.top).video_scale - 1.05).abs() < 1e-9);
        assert!((compute(&f, &tuning, f.end()).video_scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_viewport_is_always_static() {
        let mut f = frame();
        f.viewport_width = 767.0;
        let tuning = StageTuning {
            overshoot: 80.0,
            ..StageTuning::default()
        };
        for y in [0.0, f.top, f.top + 500.0, f.end(), f.end() + 500.0] {
            assert_eq!(compute(&f, &tuning, y), VisualState::mobile_static());
        }
    }

    #[test]
    fn parse_boost_defaults_and_values() {
        assert_eq!(parse_boost(""), 1.0);
        assert_eq!(parse_boost("garbage"), 1.0);
        assert_eq!(parse_boost("-2"), 1.0);
        assert_eq!(parse_boost(" 1.25 "), 1.25);
    }

    #[test]
    fn parse_overshoot_units() {
        assert_eq!(parse_overshoot("", 900.0), 0.0);
        assert_eq!(parse_overshoot("120px", 900.0), 120.0);
        assert_eq!(parse_overshoot("64", 900.0), 64.0);
        assert_eq!(parse_overshoot("20vh", 900.0), 180.0);
        assert_eq!(parse_overshoot("weird", 900.0), 0.0);
    }
}
