//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::theme::*;
use crate::{Game, GameSnapshot, MoveOutcome, Pos, Stone};

/// Main Gomoku application
///
/// Holds the one mutable [`Game`]; every frame renders from a fresh snapshot.
pub struct GomokuApp {
    game: Game,
    snapshot: GameSnapshot,
    board_view: BoardView,
    message: Option<String>,
}

impl GomokuApp {
    /// Create the app around an existing game
    pub fn new(_cc: &eframe::CreationContext<'_>, game: Game) -> Self {
        Self::with_game(game)
    }

    fn with_game(game: Game) -> Self {
        Self {
            snapshot: game.snapshot(),
            game,
            board_view: BoardView::default(),
            message: None,
        }
    }

    /// Forward a clicked intersection to the game and refresh the snapshot
    fn handle_click(&mut self, pos: Pos) {
        match self.game.apply_move(pos.row as i32, pos.col as i32) {
            Ok(outcome) => {
                self.message = None;
                match outcome {
                    MoveOutcome::Win { winner, .. } => info!(%winner, "Game won"),
                    MoveOutcome::Draw => info!("Game drawn"),
                    MoveOutcome::Continue { .. } => {}
                }
            }
            Err(e) => {
                debug!(error = %e, "Click rejected");
                self.message = Some(e.to_string());
            }
        }
        self.snapshot = self.game.snapshot();
    }

    fn new_game(&mut self, first: Option<Stone>) {
        match first {
            Some(stone) => self.game.reset_with(stone),
            None => self.game.reset(),
        }
        self.message = None;
        self.snapshot = self.game.snapshot();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game(None);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("New Game - Black first").clicked() {
                        self.new_game(Some(Stone::Black));
                        ui.close_menu();
                    }
                    if ui.button("New Game - White first").clicked() {
                        self.new_game(Some(Stone::White));
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} moves first", self.game.first_player()));
                });
            });
        });
    }

    /// Render the side panel with turn and result
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.snapshot.is_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row · 15×15").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.snapshot.current_player;
            let (accent, glyph) = match turn {
                Stone::Black => (STATUS_BLACK, TEXT_PRIMARY),
                Stone::White => (STATUS_WHITE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "●",
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.snapshot.is_over {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("to move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New Game").clicked() {
                self.new_game(None);
            }

            ui.add_space(8.0);
            let last = match self.snapshot.last_move {
                Some(pos) => format!("last {}{}", (b'A' + pos.col) as char, pos.row + 1),
                None => "no moves yet".to_string(),
            };
            ui.label(
                RichText::new(format!("Move #{} · {}", self.snapshot.move_count, last))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.snapshot.winner {
            Some(winner) => format!("{} WINS!", winner.name().to_uppercase()),
            None => "DRAW".to_string(),
        };
        let detail = match &self.snapshot.winning_line {
            Some(line) => format!("{} in a row", line.len()),
            None => "board is full".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game(None);
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARN));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, &self.snapshot) {
                self.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game(None);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
