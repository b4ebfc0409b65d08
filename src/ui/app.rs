//! Main application for the Üç Taş GUI

use egui::{CentralPanel, Context, RichText, TopBottomPanel};
use tracing::debug;

use crate::board::Side;
use crate::engine::{AIEngine, Strategy};
use crate::session::GameSession;

use super::board_view::BoardView;
use super::theme::*;

/// Main Üç Taş application
#[derive(Default)]
pub struct UcTasApp {
    session: GameSession,
    engine: AIEngine,
    board_view: BoardView,
    message: Option<String>,
}

impl UcTasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Keys: 1 optimal, 2 weak, T toggle, N new game
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Num1) {
                self.session.set_strategy(Strategy::Optimal);
            }
            if i.key_pressed(egui::Key::Num2) {
                self.session.set_strategy(Strategy::Weak);
            }
            if i.key_pressed(egui::Key::T) {
                self.session.toggle_strategy();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
                self.message = None;
            }
        });
    }

    /// Runs the search synchronously inside the frame
    fn play_computer_turn(&mut self) {
        if self.session.is_over() || self.session.turn() != Side::Computer {
            return;
        }
        match self.session.play_computer(&mut self.engine) {
            Ok(mv) => {
                if let Some(result) = self.session.last_ai_result() {
                    debug!(?mv, time_ms = result.time_ms, nodes = result.nodes, "computer played");
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn render_status(&self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(
                RichText::new(self.session.status_text())
                    .size(18.0)
                    .color(TEXT_PRIMARY),
            );
            if let Some(msg) = &self.message {
                ui.label(RichText::new(msg).size(13.0).color(TEXT_ERROR));
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(point) = self.board_view.show(ui, &self.session) {
                match self.session.click(point) {
                    Ok(_) => self.message = None,
                    Err(err) => self.message = Some(err.to_string()),
                }
                if self.session.turn() == Side::Computer {
                    ctx.request_repaint();
                }
            }
        });
    }
}

impl eframe::App for UcTasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.play_computer_turn();

        self.render_status(ctx);
        self.render_board(ctx);
    }
}
