//! Centralized theme constants for Agrosurance
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0a, 0x0f, 0x0b); // near-black green
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x11, 0x1a, 0x13);
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0e, 0x16, 0x10);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1f, 0x29, 0x21);
pub const BG_HEADER: Color32 = Color32::from_rgb(0x05, 0x2e, 0x16); // green-950

// =============================================================================
// COLORS - Accent (Green)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x15, 0x80, 0x3d); // green-700
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x05, 0x2e, 0x16); // text on accent fill

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1f, 0x2e, 0x22);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(0x15, 0x80, 0x3d); // green-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15); // yellow-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Technology cards (border, tint)
// =============================================================================
pub const TECH_COLORS: [(Color32, Color32); 3] = [
    (Color32::from_rgb(0x15, 0x80, 0x3d), Color32::from_rgb(0x0b, 0x24, 0x14)), // green
    (Color32::from_rgb(0x25, 0x63, 0xeb), Color32::from_rgb(0x0d, 0x17, 0x33)), // blue
    (Color32::from_rgb(0x93, 0x33, 0xea), Color32::from_rgb(0x1d, 0x0e, 0x33)), // purple
];

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const NAV_ACTIVE: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 40.0;
pub const FONT_TITLE: f32 = 26.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_STAT: f32 = 32.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const HEADER_HEIGHT: f32 = 64.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
/// Below this width the navigation collapses into the menu toggle
pub const COMPACT_WIDTH: f32 = 900.0;
pub const LOGO_SIZE: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const INPUT_WIDTH: f32 = 360.0;
pub const AVATAR_SIZE: f32 = 56.0;

// =============================================================================
// BORDERS & STROKES
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 12.0;
pub const RADIUS_PILL: f32 = 255.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_SECTION: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT_LIGHT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DARK,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: lighten(BG_SURFACE, 0.08),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_DARK),
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_DARK),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(10),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Translucent card used for steps, team members and stats
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x11, 0x1a, 0x13, 200))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Card with a colored border and tinted fill
pub fn tinted_frame(border: Color32, fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Section panel wrapping a whole page block
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x0e, 0x16, 0x10, 220))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(24))
}

pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_HEADER)
        .inner_margin(egui::Margin::symmetric(16, 10))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_ACCENT))
}

pub fn footer_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .inner_margin(egui::Margin::symmetric(24, 16))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_ACCENT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent green button (primary actions like Connect Wallet)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT).strong())
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_PILL)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Navigation entry. Returns true if clicked.
pub fn nav_item(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let text = egui::RichText::new(format!("{}  {}", icon, label))
        .size(FONT_BODY)
        .color(if active { TEXT_PRIMARY } else { TEXT_SECONDARY });
    let fill = if active { NAV_ACTIVE } else { Color32::TRANSPARENT };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(RADIUS_DEFAULT)
            .min_size(egui::vec2(0.0, BUTTON_HEIGHT)),
    )
    .clicked()
}

/// Returns (fill, draw_rect) for a custom-painted widget with hover/press effects.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
