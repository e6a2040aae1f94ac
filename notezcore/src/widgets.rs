//! Custom widgets — painted directly, no native styling

use crate::theme::NotezColors;
use egui::{Response, Ui, Widget};

/// Action returned by a [`stepper`] control pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepAction {
    None,
    Increment,
    Decrement,
}

/// Draw a small +/- button pair for adjusting a count.
///
/// Returns which button the user clicked (Increment, Decrement, or None).
pub fn stepper(ui: &mut Ui, add_tip: &str, remove_tip: &str) -> StepAction {
    let btn_size = egui::vec2(22.0, 22.0);
    let mut action = StepAction::None;

    for (glyph, tip, on_click) in [
        ("+", add_tip, StepAction::Increment),
        ("-", remove_tip, StepAction::Decrement),
    ] {
        let (rect, resp) = ui.allocate_exact_size(btn_size, egui::Sense::click());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = if resp.hovered() {
                NotezColors::ROSE_DARK
            } else {
                NotezColors::ROSE
            };
            painter.rect_filled(rect, 4.0, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(16.0),
                if resp.hovered() { NotezColors::PAPER } else { NotezColors::INK },
            );
        }
        if resp.on_hover_text(tip).clicked() {
            action = on_click;
        }
        ui.add_space(2.0);
    }

    action
}

/// A toggle chip for one pitch class: pale outline when off, gold when on.
pub struct NoteChip<'a> {
    text: &'a str,
    selected: bool,
}

impl<'a> NoteChip<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for NoteChip<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(40.0, ui.spacing().interact_size.y);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            if self.selected {
                painter.rect_filled(rect, 4.0, NotezColors::GOLD);
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(2.0, NotezColors::INK));
            } else {
                let fill = if response.hovered() {
                    NotezColors::ROSE
                } else {
                    NotezColors::PAPER
                };
                painter.rect_filled(rect, 4.0, fill);
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, NotezColors::LAVENDER));
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(14.0),
                NotezColors::INK,
            );
        }

        response
    }
}

/// Toolbar separator (vertical 1px ink line)
pub fn toolbar_separator(ui: &mut Ui) {
    let height = ui.spacing().interact_size.y;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().vline(
            rect.center().x,
            rect.y_range(),
            egui::Stroke::new(1.0, NotezColors::INK),
        );
    }
}

/// Status bar: ink bar with paper text
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(NotezColors::INK)
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(NotezColors::PAPER));
        });
}
