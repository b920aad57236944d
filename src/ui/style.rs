//! System-themed egui styling.
//!
//! Provides a cohesive visual style for the interface: flat panels, hard
//! borders, deep navy backgrounds with cyan accents, monospace font.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, FontData, FontDefinitions, FontFamily, Frame, Margin, Rounding, Stroke, Style, Visuals};

/// System color palette
pub mod colors {
    use egui::Color32;

    // Panel backgrounds
    pub const PANEL_BG: Color32 = Color32::from_rgb(12, 16, 28);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(40, 60, 95);

    // Interactive elements
    pub const BUTTON_BG: Color32 = Color32::from_rgb(20, 28, 46);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(30, 42, 68);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(40, 56, 90);
    pub const BUTTON_BORDER: Color32 = Color32::from_rgb(55, 85, 130);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(200, 220, 240);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 140, 165);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(90, 200, 250);

    // Progress bars
    pub const HP_BAR: Color32 = Color32::from_rgb(180, 45, 55);
    pub const MP_BAR: Color32 = Color32::from_rgb(60, 110, 220);
    pub const XP_BAR: Color32 = Color32::from_rgb(80, 190, 160);

    // Selection/Highlight
    pub const SELECTED: Color32 = Color32::from_rgb(45, 75, 110);

    // Accent colors
    pub const SYSTEM_CYAN: Color32 = Color32::from_rgb(90, 200, 250);
    pub const SYSTEM_GOLD: Color32 = Color32::from_rgb(230, 195, 90);
    pub const DANGER: Color32 = Color32::from_rgb(235, 90, 90);
    pub const SUCCESS: Color32 = Color32::from_rgb(110, 220, 130);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the system-themed visuals
pub fn system_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    // Zero rounding everywhere
    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;

    // Disable shadows
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    // Window styling
    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);

    // Panel/frame backgrounds
    visuals.panel_fill = colors::PANEL_BG;
    visuals.extreme_bg_color = colors::PANEL_BG;
    visuals.faint_bg_color = Color32::from_rgb(18, 24, 40);

    // Widget styling
    visuals.widgets = system_widgets();

    // Selection
    visuals.selection.bg_fill = colors::SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ACCENT);

    // Text colors
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Widget visuals for the system theme
fn system_widgets() -> Widgets {
    Widgets {
        noninteractive: WidgetVisuals {
            bg_fill: colors::PANEL_BG,
            weak_bg_fill: colors::PANEL_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_MUTED),
            expansion: 0.0,
        },
        inactive: WidgetVisuals {
            bg_fill: colors::BUTTON_BG,
            weak_bg_fill: colors::BUTTON_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        hovered: WidgetVisuals {
            bg_fill: colors::BUTTON_HOVER,
            weak_bg_fill: colors::BUTTON_HOVER,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::TEXT_ACCENT),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        active: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(2.0, colors::TEXT_ACCENT),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        open: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
    }
}

/// Load Hack monospace font and set as default
pub fn load_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    // Load Hack font from system
    if let Ok(font_data) = std::fs::read("/usr/share/fonts/TTF/Hack-Regular.ttf") {
        fonts
            .font_data
            .insert("hack".to_owned(), FontData::from_owned(font_data));

        // Set Hack as the primary proportional and monospace font
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, "hack".to_owned());

        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .insert(0, "hack".to_owned());
    }

    fonts
}

/// Create a system-themed window frame
pub fn system_window_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(8.0))
}

/// Create the system-themed style with immediate tooltips
pub fn system_style() -> Style {
    let mut style = Style::default();
    style.visuals = system_visuals();
    // Show tooltips immediately on hover, even while mouse is moving
    style.interaction.tooltip_delay = 0.0;
    style.interaction.show_tooltips_only_when_still = false;
    style
}
