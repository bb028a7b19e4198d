//! Main application for the Gomoku GUI

use std::path::PathBuf;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{Advisor, GameSession, Player, SuggestionKind};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app around an already prepared session
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        session: GameSession,
        advisor: Advisor,
        save_path: PathBuf,
    ) -> Self {
        Self {
            state: GameState::new(session, advisor, save_path),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for mode in GameMode::ALL {
                        if ui.button(format!("New Game ({})", mode.label())).clicked() {
                            self.state.reset(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Save").clicked() {
                        self.state.save();
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        self.state.load();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let one = self.state.session.player(Player::One).name();
                    let two = self.state.session.player(Player::Two).name();
                    ui.label(format!("X {one}  vs  O {two}"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_file_card(ui);

                if let Some(result) = self.state.result_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button_frame() -> Frame {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X O").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row, 8x8").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let session = &self.state.session;
        let turn = session.current_player();
        let info = session.current_info();

        Self::card_frame().show(ui, |ui| {
            let (accent, glyph_color) = match turn {
                Player::One => (ONE_STONE_HIGHLIGHT, TEXT_PRIMARY),
                Player::Two => (TWO_STONE, ONE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(26.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Player {}: {}", turn.tag(), info.name()))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if session.is_terminal() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if info.is_computer() {
                        ("Computer thinking...", STATUS_WARNING)
                    } else {
                        ("Your turn", STATUS_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Stones on board: {}", session.board().stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Hint button and the last suggestion
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                Self::button_frame().show(ui, |ui| {
                    let text = RichText::new("Hint (H)").size(12.0).color(TEXT_PRIMARY);
                    let hint = egui::Label::new(text).sense(egui::Sense::click());
                    if ui.add(hint).clicked() {
                        self.state.request_suggestion();
                    }
                });
            });

            if let Some(suggestion) = self.state.suggestion {
                let why = match suggestion.kind {
                    SuggestionKind::ImmediateWin => "wins now",
                    SuggestionKind::Block => "blocks a five",
                    SuggestionKind::Random => "no threats, random pick",
                };
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Try {} ({why})", suggestion.pos))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    /// Save file path and save/load buttons
    fn render_file_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SAVE FILE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.text_edit_singleline(&mut self.state.save_path);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                Self::button_frame().show(ui, |ui| {
                    let text = RichText::new("Save").size(12.0).color(TEXT_PRIMARY);
                    let save = egui::Label::new(text).sense(egui::Sense::click());
                    if ui.add(save).clicked() {
                        self.state.save();
                    }
                });
                ui.add_space(4.0);
                Self::button_frame().show(ui, |ui| {
                    let text = RichText::new("Load").size(12.0).color(TEXT_PRIMARY);
                    let load = egui::Label::new(text).sense(egui::Sense::click());
                    if ui.add(load).clicked() {
                        self.state.load();
                    }
                });
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &str) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let banner = egui::Color32::from_rgb(180, 255, 180);
                    ui.label(RichText::new("GAME OVER").size(12.0).color(banner));
                    ui.add_space(8.0);
                    ui.label(RichText::new(result).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let text = RichText::new("New Game (N)").size(14.0).strong();
                            let again = egui::Label::new(text.color(TEXT_PRIMARY))
                                .sense(egui::Sense::click());
                            if ui.add(again).clicked() {
                                let mode = self.current_mode();
                                self.state.reset(mode);
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let session = &self.state.session;
            let overlay = BoardOverlay {
                current_turn: session.current_player(),
                last_move: session.last_move(),
                suggested_move: self.state.suggestion.map(|s| s.pos),
                winning_line: session.winning_line(),
                accepting_input: self.state.is_human_turn(),
            };

            if let Some(pos) = self.board_view.show(ui, session.board(), &overlay) {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Seat layout of the game on screen, reused by "New Game"
    fn current_mode(&self) -> GameMode {
        let session = &self.state.session;
        match (
            session.player(Player::One).is_computer(),
            session.player(Player::Two).is_computer(),
        ) {
            (false, true) => GameMode::HumanVsComputer,
            (true, false) => GameMode::ComputerVsHuman,
            (false, false) => GameMode::HumanVsHuman,
            (true, true) => GameMode::ComputerVsComputer,
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (hint, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::H), i.key_pressed(egui::Key::N)));

        if hint {
            self.state.request_suggestion();
        }
        if new_game {
            let mode = self.current_mode();
            self.state.reset(mode);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.step_computer();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep ticking while the computer still has to move
        if !self.state.session.is_terminal() && self.state.session.is_computer_turn() {
            ctx.request_repaint_after(self.state.computer_wait());
        }
    }
}
