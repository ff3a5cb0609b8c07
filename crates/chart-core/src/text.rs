// File: crates/chart-core/src/text.rs
// Summary: Tooltip label shaping and drawing with Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::{label_left, Anchor, LABEL_PADDING, LABEL_RADIUS};
use crate::theme::Rgba;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` in a padded rounded box whose top edge is at `y`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_label(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: Rgba,
        background: Rgba,
    ) {
        let mut p = self.layout(text, size, color.to_skia());
        let box_w = p.longest_line() + LABEL_PADDING.0 * 2.0;
        let box_h = p.height().max(size) + LABEL_PADDING.1 * 2.0;
        let left = label_left(x, box_w, anchor);

        if !background.is_transparent() {
            let mut bg = skia::Paint::default();
            bg.set_anti_alias(true);
            bg.set_color(background.to_skia());
            let rect = skia::Rect::from_xywh(left, y, box_w, box_h);
            canvas.draw_round_rect(rect, LABEL_RADIUS, LABEL_RADIUS, &bg);
        }
        p.paint(canvas, (left + LABEL_PADDING.0, y + LABEL_PADDING.1));
    }
}
