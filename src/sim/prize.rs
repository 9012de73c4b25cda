//! Prize placement
//!
//! The prize always lands on a column the player can actually reach: columns
//! are spaced one tile apart and centered on the field like the start position.

use rand::Rng;

use super::rect::Rect;
use super::state::Prize;

/// Candidate x positions for a box of `size`, one tile apart, centered on the field
///
/// Returned in ascending order. Covers the full field width.
pub fn prize_columns(field_width: f32, tile_size: f32, size: f32) -> Vec<f32> {
    let center = (field_width - size) / 2.0;
    if center < 0.0 || tile_size <= 0.0 {
        return vec![center.max(0.0)];
    }

    let mut columns = Vec::new();
    let mut x = center;
    while x - tile_size >= 0.0 {
        x -= tile_size;
    }
    while x + size <= field_width {
        columns.push(x);
        x += tile_size;
    }
    columns
}

/// Place a prize on a random reachable column of row `y`
///
/// Columns that would overlap the HUD strip `[0, reserved_left_margin)` are
/// skipped; if that leaves nothing, every column is a candidate again.
/// The cosmetic variant is drawn independently (`None` when `variants == 0`).
pub fn place_prize<R: Rng>(
    rng: &mut R,
    field_width: f32,
    tile_size: f32,
    reserved_left_margin: f32,
    size: f32,
    y: f32,
    variants: u8,
) -> Prize {
    let columns = prize_columns(field_width, tile_size, size);
    let open: Vec<f32> = columns
        .iter()
        .copied()
        .filter(|&x| x >= reserved_left_margin)
        .collect();
    let candidates = if open.is_empty() { &columns } else { &open };

    let x = candidates[rng.random_range(0..candidates.len())];
    let variant = (variants > 0).then(|| rng.random_range(0..variants));

    Prize {
        rect: Rect::new(x, y, size, size),
        variant,
    }
}
