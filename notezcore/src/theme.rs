//! Notez theme
//!
//! Ink-on-paper palette with soft rounded corners. Dark ink panels for
//! chrome, pale note cells on the board itself.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The application palette.
pub struct NotezColors;

impl NotezColors {
    /// Deep ink blue used for chrome, borders, and text on pale fills.
    pub const INK: Color32 = Color32::from_rgb(0x23, 0x29, 0x46);
    /// Near-white paper, the base fill.
    pub const PAPER: Color32 = Color32::from_rgb(0xff, 0xff, 0xfe);
    /// Pale lavender, the even-fret cell fill.
    pub const LAVENDER: Color32 = Color32::from_rgb(0xb8, 0xc1, 0xec);
    /// Rose, the open-string fill and button fill.
    pub const ROSE: Color32 = Color32::from_rgb(0xee, 0xbb, 0xc3);
    /// Darker rose for hovered buttons.
    pub const ROSE_DARK: Color32 = Color32::from_rgb(0xd4, 0x93, 0x9d);
    /// Gold, the highlight fill.
    pub const GOLD: Color32 = Color32::from_rgb(0xf9, 0xbc, 0x60);
}

/// Theme configuration for the Notez app
pub struct NotezTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for NotezTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 10.0,
            item_spacing: 5.0,
        }
    }
}

impl NotezTheme {
    /// Apply the Notez theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = NotezColors::PAPER;
        visuals.panel_fill = NotezColors::PAPER;
        visuals.faint_bg_color = NotezColors::PAPER;
        visuals.extreme_bg_color = NotezColors::PAPER;

        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);

        visuals.window_stroke = Stroke::new(1.0, NotezColors::INK);

        visuals.override_text_color = Some(NotezColors::INK);

        let pale = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, NotezColors::LAVENDER);
            ws.fg_stroke = Stroke::new(1.0, NotezColors::INK);
            ws.rounding = Rounding::same(4.0);
        };
        pale(&mut visuals.widgets.noninteractive, NotezColors::PAPER);
        pale(&mut visuals.widgets.inactive, NotezColors::PAPER);
        pale(&mut visuals.widgets.hovered, NotezColors::ROSE);
        pale(&mut visuals.widgets.active, NotezColors::ROSE_DARK);
        pale(&mut visuals.widgets.open, NotezColors::PAPER);

        visuals.selection.bg_fill = NotezColors::GOLD;
        visuals.selection.stroke = Stroke::new(1.0, NotezColors::INK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);

        ctx.set_style(style);
    }

    /// Window frame: paper fill, 1px ink outline
    pub fn window_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(NotezColors::PAPER)
            .stroke(Stroke::new(1.0, NotezColors::INK))
            .inner_margin(egui::Margin::same(1.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(NotezColors::PAPER)
        .stroke(Stroke::new(1.0, NotezColors::INK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Consume problematic key events to prevent unwanted egui behaviors.
/// Call this at the start of your app's update() function.
/// - Tab: prevents menu focus navigation and focus cycling
/// - Cmd+/Cmd-: prevents zoom scaling
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) =>
            {
                false
            }
            _ => true,
        });
    });
}
