use std::sync::Arc;

use eframe::egui::{Align2, FontId, InputState, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use puzzlen_game::{Snapshot, geometry::PixelPoint};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::board_theme::BoardPalette,
};

const TILE_GAP: f32 = 1.0;
const TILE_ROUNDING: f32 = 4.0;
const FONT_RATIO: f32 = 0.5;

#[expect(clippy::cast_precision_loss)]
fn to_f32(value: i32) -> f32 {
    value as f32
}

#[expect(clippy::cast_possible_truncation)]
fn to_pixel(board_min: Pos2, pos: Pos2) -> PixelPoint {
    let rel = pos - board_min;
    PixelPoint::new(rel.x.floor() as i32, rel.y.floor() as i32)
}

pub fn show(
    ui: &mut Ui,
    snapshot: &Snapshot,
    solved: bool,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let palette = BoardPalette::from_visuals(&style.visuals);
    let (width, height) = snapshot.pixel_size();
    let (rect, _response) = ui.allocate_exact_size(
        Vec2::new(to_f32(width), to_f32(height)),
        Sense::click_and_drag(),
    );

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.board_bg);

    let cell_size = to_f32(snapshot.cell_size);
    let font = FontId::proportional(cell_size * FONT_RATIO);
    for (index, tile, origin) in snapshot.numbered_tiles() {
        let min = rect.min + Vec2::new(to_f32(origin.x), to_f32(origin.y));
        let tile_rect = Rect::from_min_size(min, Vec2::splat(cell_size)).shrink(TILE_GAP);
        let fill = if snapshot.active_index == Some(index) {
            palette.tile_bg_active
        } else if solved {
            palette.tile_bg_solved
        } else {
            palette.tile_bg
        };
        painter.rect_filled(tile_rect, TILE_ROUNDING, fill);
        painter.rect_stroke(
            tile_rect,
            TILE_ROUNDING,
            Stroke::new(1.0, palette.tile_border),
            StrokeKind::Inside,
        );
        painter.text(
            tile_rect.center(),
            Align2::CENTER_CENTER,
            tile.to_string(),
            font.clone(),
            palette.text,
        );
    }

    ui.input(|i| handle_pointer(i, rect.min, action_queue));
}

fn handle_pointer(i: &InputState, board_min: Pos2, action_queue: &mut ActionRequestQueue) {
    let pointer = &i.pointer;
    if pointer.primary_pressed()
        && let Some(pos) = pointer.interact_pos()
    {
        action_queue.request(Action::ButtonState(true));
        action_queue.request(Action::PointerDown(to_pixel(board_min, pos)));
    }
    if pointer.is_moving()
        && let Some(pos) = pointer.latest_pos()
    {
        action_queue.request(Action::PointerMove(to_pixel(board_min, pos)));
    }
    if pointer.primary_released() {
        action_queue.request(Action::ButtonState(false));
        action_queue.request(Action::PointerUp);
    }
}
