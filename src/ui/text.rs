//! HUD text helpers

use macroquad::prelude::*;

/// Draw `text` with its box's top-left corner at (x, y).
///
/// macroquad positions text by its baseline; the HUD layout is written in
/// top-left coordinates, so shift down by the measured ascent.
pub fn draw_label(text: &str, x: f32, y: f32, font_size: u16, color: Color, font: Option<&Font>) {
    let dims = measure_text(text, font, font_size, 1.0);
    draw_text_ex(
        text,
        x.round(),
        (y + dims.offset_y).round(),
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}
