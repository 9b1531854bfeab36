//! Packed 32-bit color and linear blending.
//!
//! One channel order is used everywhere in this toolkit: the
//! least-significant byte is red, then green, blue, alpha — `0xAABBGGRR`
//! when written as a hex literal. That is the layout the presentation and
//! PPM paths decode byte-by-byte, so pack, blend and save all agree.
//! Call sites should never hand-pack a u32; go through [`Color::rgb`],
//! [`Color::rgba`] or [`Color::from_hex`].

/// An RGBA color packed into a single u32 (`0xAABBGGRR`).
///
/// Treated as an opaque scalar by the rasterizer; only [`Color::blend`] and
/// gradient evaluation decode the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    // ── Basic colors ──────────────────────────────────────────────────────────
    pub const BLACK:   Self = Self::from_hex(0x000000);
    pub const WHITE:   Self = Self::from_hex(0xFFFFFF);
    pub const RED:     Self = Self::from_hex(0xFF0000);
    pub const GREEN:   Self = Self::from_hex(0x00FF00);
    pub const BLUE:    Self = Self::from_hex(0x0000FF);
    pub const YELLOW:  Self = Self::from_hex(0xFFFF00);
    pub const CYAN:    Self = Self::from_hex(0x00FFFF);
    pub const MAGENTA: Self = Self::from_hex(0xFF00FF);

    // ── Grayscale ─────────────────────────────────────────────────────────────
    pub const GRAY:       Self = Self::from_hex(0x808080);
    pub const DARK_GRAY:  Self = Self::from_hex(0x404040);
    pub const LIGHT_GRAY: Self = Self::from_hex(0xC0C0C0);
    pub const CHARCOAL:   Self = Self::from_hex(0x202020);

    // ── Red variations ────────────────────────────────────────────────────────
    pub const DARK_RED: Self = Self::from_hex(0x8B0000);
    pub const CRIMSON:  Self = Self::from_hex(0xDC143C);
    pub const CORAL:    Self = Self::from_hex(0xFF7F50);

    // ── Green variations ──────────────────────────────────────────────────────
    pub const DARK_GREEN:  Self = Self::from_hex(0x006400);
    pub const LIGHT_GREEN: Self = Self::from_hex(0x90EE90);
    pub const LIME:        Self = Self::from_hex(0x32CD32);
    pub const FOREST:      Self = Self::from_hex(0x228B22);
    pub const OLIVE:       Self = Self::from_hex(0x808000);

    // ── Blue variations ───────────────────────────────────────────────────────
    pub const DARK_BLUE:  Self = Self::from_hex(0x00008B);
    pub const LIGHT_BLUE: Self = Self::from_hex(0xADD8E6);
    pub const SKY_BLUE:   Self = Self::from_hex(0x87CEEB);
    pub const NAVY:       Self = Self::from_hex(0x000080);
    pub const TURQUOISE:  Self = Self::from_hex(0x40E0D0);

    // ── Yellow / orange ───────────────────────────────────────────────────────
    pub const ORANGE: Self = Self::from_hex(0xFFA500);
    pub const GOLD:   Self = Self::from_hex(0xFFD700);
    pub const AMBER:  Self = Self::from_hex(0xFFBF00);

    // ── Purple / pink ─────────────────────────────────────────────────────────
    pub const PURPLE:   Self = Self::from_hex(0x800080);
    pub const VIOLET:   Self = Self::from_hex(0x8A2BE2);
    pub const PINK:     Self = Self::from_hex(0xFFC0CB);
    pub const HOT_PINK: Self = Self::from_hex(0xFF69B4);

    // ── Brown tones ───────────────────────────────────────────────────────────
    pub const BROWN:        Self = Self::from_hex(0xA52A2A);
    pub const TAN:          Self = Self::from_hex(0xD2B48C);
    pub const SADDLE_BROWN: Self = Self::from_hex(0x8B4513);

    // ── UI accents ────────────────────────────────────────────────────────────
    pub const SUCCESS:   Self = Self::from_hex(0x28A745);
    pub const WARNING:   Self = Self::from_hex(0xFFC107);
    pub const DANGER:    Self = Self::from_hex(0xDC3545);
    pub const INFO:      Self = Self::from_hex(0x17A2B8);
    pub const PRIMARY:   Self = Self::from_hex(0x007BFF);
    pub const SECONDARY: Self = Self::from_hex(0x6C757D);

    pub const TRANSPARENT: Self = Self(0);

    /// Pack four 8-bit channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32)
    }

    /// Pack an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Construct an opaque color from a `0xRRGGBB` hex literal.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    #[inline] pub const fn r(self) -> u8 { (self.0 & 0xFF) as u8 }
    #[inline] pub const fn g(self) -> u8 { ((self.0 >> 8) & 0xFF) as u8 }
    #[inline] pub const fn b(self) -> u8 { ((self.0 >> 16) & 0xFF) as u8 }
    #[inline] pub const fn a(self) -> u8 { ((self.0 >> 24) & 0xFF) as u8 }

    #[inline] pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((a as u32) << 24))
    }

    /// Per-channel linear interpolation between `self` and `other`.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` returns `self`, `t = 1` returns
    /// `other`.
    pub fn blend(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round() as u8
        };
        Self::rgba(
            lerp(self.r(), other.r()),
            lerp(self.g(), other.g()),
            lerp(self.b(), other.b()),
            lerp(self.a(), other.a()),
        )
    }
}

impl From<u32> for Color { fn from(v: u32) -> Self { Self(v) } }
impl From<Color> for u32 { fn from(c: Color) -> Self { c.0 } }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_puts_red_in_the_low_byte() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.0, 0xFF56_3412);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.a(), 0xFF);
    }

    #[test]
    fn from_hex_matches_rgb() {
        assert_eq!(Color::from_hex(0x123456), Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(Color::WHITE.0, 0xFFFF_FFFF);
    }

    #[test]
    fn blend_endpoints_and_midpoint() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 255, 255);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn blend_clamps_out_of_range_factors() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 210, 220);
        assert_eq!(a.blend(b, -4.0), a);
        assert_eq!(a.blend(b, 7.5), b);
    }
}
