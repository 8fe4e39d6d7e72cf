use eframe::egui::{Color32, Visuals};

/// Color palette for board rendering.
///
/// Derived from `egui::Visuals` so the board follows the light/dark theme.
#[derive(Debug, Clone)]
pub struct BoardPalette {
    pub board_bg: Color32,
    pub tile_bg: Color32,
    pub tile_bg_active: Color32,
    pub tile_bg_solved: Color32,
    pub tile_border: Color32,
    pub text: Color32,
}

impl BoardPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            board_bg: visuals.extreme_bg_color,
            tile_bg: visuals.widgets.inactive.bg_fill,
            tile_bg_active: visuals.selection.bg_fill,
            tile_bg_solved: visuals.widgets.hovered.bg_fill,
            tile_border: visuals.widgets.inactive.fg_stroke.color,
            text: visuals.strong_text_color(),
        }
    }
}
