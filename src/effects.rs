//! Falling-hearts background and the "Yes" heart burst.
//!
//! Both are generated once (hearts at mount, particles when the celebration
//! starts) and then animated purely by CSS keyframes; no per-frame Rust work.

use crate::config::Variant;
use crate::rng::UniformSource;

// --- Falling hearts ----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartStyle {
    pub duration_base_s: f64,
    pub duration_spread_s: f64,
    pub size_min_px: f64,
    pub size_spread_px: f64,
    pub delay_spread_s: f64,
    /// Opacity at 10% and 90% of the fall.
    pub fade_in_opacity: f64,
    pub fade_out_opacity: f64,
}

impl HeartStyle {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                duration_base_s: 8.0,
                duration_spread_s: 12.0,
                size_min_px: 15.0,
                size_spread_px: 20.0,
                delay_spread_s: 5.0,
                fade_in_opacity: 0.4,
                fade_out_opacity: 0.2,
            },
            Variant::Padded => Self {
                duration_base_s: 10.0,
                duration_spread_s: 15.0,
                size_min_px: 15.0,
                size_spread_px: 25.0,
                delay_spread_s: 5.0,
                fade_in_opacity: 0.5,
                fade_out_opacity: 0.3,
            },
        }
    }
}

/// One background heart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingHeart {
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_px: f64,
}

impl FallingHeart {
    pub fn inline_style(&self) -> String {
        format!(
            "left:{:.3}%;width:{:.1}px;height:{:.1}px;animation:fall {:.3}s linear {:.3}s infinite;",
            self.left_pct, self.size_px, self.size_px, self.duration_s, self.delay_s
        )
    }
}

pub fn spawn_hearts<R: UniformSource>(
    count: usize,
    style: &HeartStyle,
    rng: &mut R,
) -> Vec<FallingHeart> {
    (0..count)
        .map(|_| FallingHeart {
            left_pct: rng.range(0.0, 100.0),
            delay_s: rng.range(0.0, style.delay_spread_s),
            duration_s: rng.range(style.duration_base_s, style.duration_spread_s),
            size_px: rng.range(style.size_min_px, style.size_spread_px),
        })
        .collect()
}

pub fn fall_keyframes(style: &HeartStyle) -> String {
    format!(
        "@keyframes fall {{\
           0% {{ transform: translateY(-10vh) rotate(0deg); opacity: 0; }}\
           10% {{ opacity: {}; }}\
           90% {{ opacity: {}; }}\
           100% {{ transform: translateY(110vh) rotate(360deg); opacity: 0; }}\
         }}",
        style.fade_in_opacity, style.fade_out_opacity
    )
}

// --- Celebration burst -------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstStyle {
    pub palette: &'static [&'static str],
    pub size_min_px: f64,
    pub size_spread_px: f64,
    pub speed_min: f64,
    pub speed_spread: f64,
    pub duration_s: f64,
    /// Keyframe percentage where the heart is fully grown.
    pub peak_pct: u8,
    pub peak_scale: f64,
    /// Distance in px travelled by a heart of average speed.
    pub travel_px: f64,
    /// Final rotation = angle * spin.
    pub spin: f64,
}

const CLASSIC_PALETTE: &[&str] = &["#ff4d6d", "#ff758f", "#ff8fa3", "#ffb3c1", "#fff0f3"];
const PADDED_PALETTE: &[&str] = &[
    "#ff0a54", "#ff477e", "#ff7096", "#ff85a1", "#fbb1bd", "#f9bec7",
];

impl BurstStyle {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                palette: CLASSIC_PALETTE,
                size_min_px: 10.0,
                size_spread_px: 30.0,
                speed_min: 5.0,
                speed_spread: 15.0,
                duration_s: 2.5,
                peak_pct: 20,
                peak_scale: 1.5,
                travel_px: 700.0,
                spin: 8.0,
            },
            Variant::Padded => Self {
                palette: PADDED_PALETTE,
                size_min_px: 10.0,
                size_spread_px: 35.0,
                speed_min: 6.0,
                speed_spread: 18.0,
                duration_s: 3.0,
                peak_pct: 15,
                peak_scale: 1.6,
                travel_px: 800.0,
                spin: 10.0,
            },
        }
    }

    fn mean_speed(&self) -> f64 {
        self.speed_min + self.speed_spread / 2.0
    }
}

/// One heart of the burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub color: &'static str,
    pub angle_deg: f64,
    pub speed: f64,
}

impl Particle {
    /// Where the heart ends up relative to its origin.
    pub fn end_offset(&self, travel_px: f64) -> (f64, f64) {
        let rad = self.angle_deg.to_radians();
        (rad.cos() * travel_px, rad.sin() * travel_px)
    }

    /// Distance flown by the end of the animation, scaled by speed.
    pub fn travel(&self, style: &BurstStyle) -> f64 {
        let mean = style.mean_speed();
        if mean > 0.0 {
            style.travel_px * self.speed / mean
        } else {
            style.travel_px
        }
    }

    pub fn animation_name(&self) -> String {
        format!("explode-{}", self.id)
    }

    pub fn keyframes(&self, style: &BurstStyle) -> String {
        let (ex, ey) = self.end_offset(self.travel(style));
        format!(
            "@keyframes {name} {{\
               0% {{ transform: translate(-50%, -50%) scale(0) rotate(0deg); opacity: 1; }}\
               {peak}% {{ transform: translate(-50%, -50%) scale({scale}) rotate({angle}deg); opacity: 1; }}\
               100% {{ transform: translate(calc(-50% + {ex:.2}px), calc(-50% + {ey:.2}px)) scale(0) rotate({spin}deg); opacity: 0; }}\
             }}",
            name = self.animation_name(),
            peak = style.peak_pct,
            scale = style.peak_scale,
            angle = self.angle_deg,
            ex = ex,
            ey = ey,
            spin = self.angle_deg * style.spin,
        )
    }

    pub fn inline_style(&self, style: &BurstStyle) -> String {
        format!(
            "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;color:{};\
             animation:{} {}s forwards cubic-bezier(0.12, 0, 0.39, 0);",
            self.x,
            self.y,
            self.size_px,
            self.size_px,
            self.color,
            self.animation_name(),
            style.duration_s
        )
    }
}

/// Burst of `count` hearts from `(cx, cy)`, normally the viewport centre.
pub fn spawn_burst<R: UniformSource>(
    count: usize,
    cx: f64,
    cy: f64,
    style: &BurstStyle,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: cx,
            y: cy,
            size_px: rng.range(style.size_min_px, style.size_spread_px),
            color: style.palette[rng.index(style.palette.len())],
            angle_deg: rng.range(0.0, 360.0),
            speed: rng.range(style.speed_min, style.speed_spread),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift64;

    #[test]
    fn test_hearts_within_variant_ranges() {
        let mut rng = Xorshift64::new(21);
        for variant in [Variant::Classic, Variant::Padded] {
            let style = HeartStyle::for_variant(variant);
            let hearts = spawn_hearts(200, &style, &mut rng);
            assert_eq!(hearts.len(), 200);
            for h in &hearts {
                assert!((0.0..100.0).contains(&h.left_pct));
                assert!((0.0..style.delay_spread_s).contains(&h.delay_s));
                assert!(h.duration_s >= style.duration_base_s);
                assert!(h.duration_s < style.duration_base_s + style.duration_spread_s);
                assert!(h.size_px >= style.size_min_px);
                assert!(h.size_px < style.size_min_px + style.size_spread_px);
            }
        }
    }

    #[test]
    fn test_burst_starts_at_centre_with_palette_colours() {
        let mut rng = Xorshift64::new(8);
        let style = BurstStyle::for_variant(Variant::Padded);
        let ps = spawn_burst(80, 400.0, 300.0, &style, &mut rng);
        assert_eq!(ps.len(), 80);
        for (i, p) in ps.iter().enumerate() {
            assert_eq!(p.id, i);
            assert_eq!((p.x, p.y), (400.0, 300.0));
            assert!(style.palette.contains(&p.color));
            assert!((0.0..360.0).contains(&p.angle_deg));
            assert!(p.speed >= 6.0 && p.speed < 24.0);
        }
    }

    fn particle(id: usize, angle_deg: f64, speed: f64) -> Particle {
        Particle {
            id,
            x: 0.0,
            y: 0.0,
            size_px: 10.0,
            color: "#fff",
            angle_deg,
            speed,
        }
    }

    #[test]
    fn test_end_offset_is_travel_distance() {
        let p = particle(0, 37.0, 5.0);
        let (ex, ey) = p.end_offset(700.0);
        assert!(((ex * ex + ey * ey).sqrt() - 700.0).abs() < 1e-6);
        let right = Particle { angle_deg: 0.0, ..p };
        let (rx, ry) = right.end_offset(800.0);
        assert!((rx - 800.0).abs() < 1e-9 && ry.abs() < 1e-9);
    }

    #[test]
    fn test_keyframes_name_and_peak() {
        let style = BurstStyle::for_variant(Variant::Classic);
        let p = particle(7, 90.0, 12.5);
        let kf = p.keyframes(&style);
        assert!(kf.starts_with("@keyframes explode-7 {"));
        assert!(kf.contains("20% {"));
        assert!(kf.contains("scale(1.5)"));
        assert!(kf.contains("rotate(720deg)"));
        assert!(p.inline_style(&style).contains("explode-7 2.5s"));
    }

    #[test]
    fn test_faster_hearts_fly_further() {
        let style = BurstStyle::for_variant(Variant::Classic);
        // classic speeds span 5..20, mean 12.5
        assert!((particle(0, 0.0, 12.5).travel(&style) - 700.0).abs() < 1e-9);
        assert!((particle(0, 0.0, 5.0).travel(&style) - 280.0).abs() < 1e-9);
        assert!(particle(0, 0.0, 19.0).travel(&style) > 1000.0);
        // end translation follows the scaled distance
        let kf = particle(3, 0.0, 5.0).keyframes(&style);
        assert!(kf.contains("calc(-50% + 280.00px)"), "{}", kf);
    }

    #[test]
    fn test_fall_keyframes_opacity() {
        let kf = fall_keyframes(&HeartStyle::for_variant(Variant::Padded));
        assert!(kf.contains("10% { opacity: 0.5; }"));
        assert!(kf.contains("90% { opacity: 0.3; }"));
    }
}
