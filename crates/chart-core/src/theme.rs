// File: crates/chart-core/src/theme.rs
// Summary: Color themes for the price chart (backend-neutral RGBA with Skia/CSS conversions).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self::new(r, g, b, 255) }

    /// `0xRRGGBB`, fully opaque.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn is_transparent(&self) -> bool { self.a == 0 }

    /// CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise, `transparent` at zero alpha.
    pub fn to_css(&self) -> String {
        match self.a {
            0 => "transparent".to_string(),
            255 => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            a => format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, a as f32 / 255.0),
        }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub line_stroke: Rgba,
    pub crosshair: Rgba,
    pub marker_fill: Rgba,
    pub marker_stroke: Rgba,
    pub price_label_bg: Rgba,
    pub price_label_text: Rgba,
    pub date_label_bg: Rgba,
    pub date_label_text: Rgba,
}

impl Theme {
    /// Mint background with a white line and blue crosshair.
    pub fn mint() -> Self {
        Self {
            name: "mint",
            background: Rgba::hex(0x32deaa),
            line_stroke: Rgba::WHITE,
            crosshair: Rgba::hex(0x5c77eb),
            marker_fill: Rgba::hex(0x5c77eb),
            marker_stroke: Rgba::WHITE,
            price_label_bg: Rgba::hex(0x5c77eb),
            price_label_text: Rgba::WHITE,
            date_label_bg: Rgba::WHITE,
            date_label_text: Rgba::hex(0x666666),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            line_stroke: Rgba::rgb(64, 160, 255),
            crosshair: Rgba::rgb(255, 230, 70),
            marker_fill: Rgba::rgb(255, 230, 70),
            marker_stroke: Rgba::rgb(18, 18, 20),
            price_label_bg: Rgba::rgb(255, 230, 70),
            price_label_text: Rgba::rgb(18, 18, 20),
            date_label_bg: Rgba::rgb(40, 40, 45),
            date_label_text: Rgba::rgb(235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            line_stroke: Rgba::rgb(32, 120, 200),
            crosshair: Rgba::rgb(30, 120, 240),
            marker_fill: Rgba::rgb(30, 120, 240),
            marker_stroke: Rgba::WHITE,
            price_label_bg: Rgba::rgb(30, 120, 240),
            price_label_text: Rgba::WHITE,
            date_label_bg: Rgba::rgb(230, 230, 235),
            date_label_text: Rgba::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::mint() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::mint(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to mint.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::mint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_forms() {
        assert_eq!(Rgba::hex(0x5c77eb).to_css(), "#5c77eb");
        assert_eq!(Rgba::TRANSPARENT.to_css(), "transparent");
        assert_eq!(Rgba::new(0, 0, 0, 51).to_css(), "rgba(0,0,0,0.200)");
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "mint");
    }
}
