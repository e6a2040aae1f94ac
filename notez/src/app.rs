//! Notez application

use crate::fretboard::{CellShade, Fretboard};
use crate::music::{PitchClass, Scale};
use egui::{Color32, Context, Rect, Sense, Stroke, Vec2};
use notezcore::storage;
use notezcore::theme::{menu_bar, NotezColors};
use notezcore::widgets::{status_bar, stepper, toolbar_separator, NoteChip, StepAction};
use std::path::PathBuf;

const LABEL_W: f32 = 76.0;
const COMBO_W: f32 = 64.0;
const CELL_W: f32 = 42.0;
const CELL_H: f32 = 30.0;
const CELL_GAP: f32 = 4.0;

fn save_path() -> PathBuf {
    storage::config_dir("notez").join("board.json")
}

fn cell_fill(shade: CellShade) -> Color32 {
    match shade {
        CellShade::Open => NotezColors::ROSE,
        CellShade::Highlight => NotezColors::GOLD,
        CellShade::Even => NotezColors::LAVENDER,
        CellShade::Odd => NotezColors::PAPER,
    }
}

pub struct NotezApp {
    board: Fretboard,
    show_about: bool,
}

impl NotezApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            board: Self::load_saved_board().unwrap_or_default(),
            show_about: false,
        }
    }

    fn load_saved_board() -> Option<Fretboard> {
        let path = save_path();
        if !path.exists() {
            return None;
        }
        match storage::load_json(&path) {
            Ok(board) => Some(board),
            Err(err) => {
                log::warn!("ignoring unreadable saved board: {}", err);
                None
            }
        }
    }

    fn save_board(&self) {
        if let Err(err) = storage::save_json(&save_path(), &self.board) {
            log::warn!("could not save board: {}", err);
        }
    }

    /// Width of one painted row of note cells.
    fn row_width(&self) -> f32 {
        let cols = (self.board.fret_count() + 1) as f32;
        (CELL_W + CELL_GAP) * cols - CELL_GAP
    }

    /// Paint a small ink chip with centered paper text (headers and labels).
    fn header_chip(ui: &mut egui::Ui, size: Vec2, text: &str) {
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, NotezColors::INK);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(12.0),
                NotezColors::PAPER,
            );
        }
    }

    /// Header row: corner label, fret numbers, fret +/- control.
    fn render_header_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            Self::header_chip(
                ui,
                Vec2::new(LABEL_W + COMBO_W + ui.spacing().item_spacing.x, CELL_H),
                "string / fret",
            );

            let (rect, _) = ui.allocate_exact_size(Vec2::new(self.row_width(), CELL_H), Sense::hover());
            if ui.is_rect_visible(rect) {
                let painter = ui.painter();
                for fret in 0..=self.board.fret_count() {
                    let cell_rect = Rect::from_min_size(
                        egui::pos2(rect.min.x + fret as f32 * (CELL_W + CELL_GAP), rect.min.y),
                        Vec2::new(CELL_W, CELL_H),
                    );
                    painter.rect_filled(cell_rect, 4.0, NotezColors::INK);
                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        fret.to_string(),
                        egui::FontId::proportional(12.0),
                        NotezColors::PAPER,
                    );
                }
            }

            match stepper(ui, "add fret", "remove fret") {
                StepAction::Increment => self.board.add_fret(),
                StepAction::Decrement => self.board.remove_fret(),
                StepAction::None => {}
            }
        });
    }

    /// One string row: label, tuning combo, and the painted note cells.
    fn render_string_row(&mut self, ui: &mut egui::Ui, string: usize) {
        ui.horizontal(|ui| {
            Self::header_chip(ui, Vec2::new(LABEL_W, CELL_H), &format!("string {}", string + 1));

            let current = self.board.tuning(string).unwrap_or(PitchClass::E);
            let mut selected = current;
            egui::ComboBox::from_id_source(("tuning", string))
                .selected_text(selected.name())
                .width(COMBO_W)
                .show_ui(ui, |ui| {
                    for note in PitchClass::CHROMATIC {
                        ui.selectable_value(&mut selected, note, note.name());
                    }
                });
            if selected != current {
                self.board.set_tuning(string, selected);
            }

            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(self.row_width(), CELL_H), Sense::click());

            let hovered_fret = response
                .hover_pos()
                .map(|pos| self.fret_at(rect, pos))
                .filter(|f| *f <= self.board.fret_count());

            if ui.is_rect_visible(rect) {
                let painter = ui.painter();
                for fret in 0..=self.board.fret_count() {
                    let cell = match self.board.cell(string, fret) {
                        Some(c) => c,
                        None => continue,
                    };
                    let cell_rect = Rect::from_min_size(
                        egui::pos2(rect.min.x + fret as f32 * (CELL_W + CELL_GAP), rect.min.y),
                        Vec2::new(CELL_W, CELL_H),
                    );

                    painter.rect_filled(cell_rect, 4.0, cell_fill(cell.shade()));
                    if cell.highlighted && !cell.open {
                        painter.rect_stroke(cell_rect, 4.0, Stroke::new(2.0, NotezColors::INK));
                    }
                    if hovered_fret == Some(fret) {
                        painter.rect_stroke(cell_rect, 4.0, Stroke::new(1.0, NotezColors::ROSE_DARK));
                    }

                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        cell.note.name(),
                        egui::FontId::proportional(13.0),
                        NotezColors::INK,
                    );
                }
            }

            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let fret = self.fret_at(rect, pos);
                    if let Some(note) = self.board.note_at(string, fret) {
                        self.board.note_clicked(note);
                    }
                }
            }
        });
    }

    /// Map a pointer position inside a row rect to a fret column.
    fn fret_at(&self, rect: Rect, pos: egui::Pos2) -> usize {
        let col = ((pos.x - rect.min.x) / (CELL_W + CELL_GAP)) as usize;
        col.min(self.board.fret_count())
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        self.render_header_row(ui);
        ui.add_space(2.0);

        for string in 0..self.board.string_count() {
            self.render_string_row(ui, string);
        }

        ui.add_space(2.0);
        ui.horizontal(|ui| {
            match stepper(ui, "add string", "remove string") {
                StepAction::Increment => self.board.add_string(),
                StepAction::Decrement => self.board.remove_string(),
                StepAction::None => {}
            }
        });
    }

    /// Preset selector, clear button, and the 12 note toggle chips.
    fn render_highlight_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("scale presets:");
            let mut choice: Option<Scale> = None;
            egui::ComboBox::from_id_source("preset")
                .selected_text("select a scale…")
                .width(120.0)
                .show_ui(ui, |ui| {
                    for scale in Scale::ALL {
                        if ui.selectable_label(false, scale.name()).clicked() {
                            choice = Some(scale);
                        }
                    }
                });
            if let Some(scale) = choice {
                self.board.apply_preset(scale);
            }

            if ui.button("clear highlighting").clicked() {
                self.board.clear_highlights();
            }

            toolbar_separator(ui);

            // 2x6 chip grid for the 12 pitch classes
            ui.vertical(|ui| {
                for row in PitchClass::CHROMATIC.chunks(6) {
                    ui.horizontal(|ui| {
                        for &note in row {
                            let on = self.board.is_highlighted(note);
                            if ui.add(NoteChip::new(note.name()).selected(on)).clicked() {
                                self.board.set_highlight(note, !on);
                            }
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for NotezApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        notezcore::theme::consume_special_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("board", |ui| {
                    if ui.button("reset board").clicked() {
                        self.board = Fretboard::default();
                        ui.close_menu();
                    }
                    if ui.button("clear highlighting").clicked() {
                        self.board.clear_highlights();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_highlight_controls(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(
                ui,
                &format!(
                    "{} strings  |  {} frets  |  {} highlighted",
                    self.board.string_count(),
                    self.board.fret_count(),
                    self.board.highlights().len()
                ),
            );
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(NotezColors::PAPER)
                    .inner_margin(egui::Margin::same(15.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    self.render_board(ui);
                });
            });

        if self.show_about {
            egui::Window::new("about notez")
                .collapsible(false)
                .resizable(false)
                .default_width(300.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Notez");
                        ui.label("version 0.1.0");
                        ui.add_space(8.0);
                        ui.label("string instrument visualizer");
                    });
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label("features:");
                    ui.label("  configurable tuning, strings, and frets");
                    ui.label("  scale preset highlighting");
                    ui.label("  click any note to highlight it");
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_board();
    }
}
