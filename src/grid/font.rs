use super::mapper::Rect;

// Height and width of a glyph in font units.
pub const GLYPH_ROWS: u32 = 5;
pub const GLYPH_COLUMNS: u32 = 4;

// One byte per glyph row, the high nibble holds the pixels.
const DIGITS: [[u8; 5]; 10] = [
    [0xF0, 0x90, 0x90, 0x90, 0xF0], // 0
    [0x20, 0x60, 0x20, 0x20, 0x70], // 1
    [0xF0, 0x10, 0xF0, 0x80, 0xF0], // 2
    [0xF0, 0x10, 0xF0, 0x10, 0xF0], // 3
    [0x90, 0x90, 0xF0, 0x10, 0x10], // 4
    [0xF0, 0x80, 0xF0, 0x10, 0xF0], // 5
    [0xF0, 0x80, 0xF0, 0x90, 0xF0], // 6
    [0xF0, 0x10, 0x20, 0x40, 0x40], // 7
    [0xF0, 0x90, 0xF0, 0x90, 0xF0], // 8
    [0xF0, 0x90, 0xF0, 0x10, 0xF0], // 9
];

/// Size of one font pixel for text drawn `height` pixels tall.
pub fn unit(height: u32) -> u32 {
    (height / GLYPH_ROWS).max(1)
}

/// Horizontal distance between the starts of two consecutive glyphs,
/// including one unit of spacing.
pub fn advance(height: u32) -> u32 {
    unit(height) * (GLYPH_COLUMNS + 1)
}

/// Width of `text` once drawn, without the trailing spacing.
pub fn text_width(text: &str, height: u32) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => n * advance(height) - unit(height),
    }
}

/// The filled rectangles that draw `text` with its top-left corner at
/// `(x, y)`. Anything that is not an ASCII digit is skipped but still
/// takes up space.
pub fn text_rects(text: &str, x: i32, y: i32, height: u32) -> Vec<Rect> {
    let unit = unit(height);
    let mut rects = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let Some(glyph) = c.to_digit(10).map(|d| &DIGITS[d as usize]) else {
            continue;
        };
        let origin = x + (index as u32 * advance(height)) as i32;

        for (row, bits) in glyph.iter().enumerate() {
            for column in 0..GLYPH_COLUMNS {
                if bits & (0x80 >> column) != 0 {
                    rects.push(Rect {
                        x: origin + (column * unit) as i32,
                        y: y + (row as u32 * unit) as i32,
                        w: unit,
                        h: unit,
                    });
                }
            }
        }
    }

    rects
}
