mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::engine::KeyValueStore;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

/// Adaptador del storage de eframe al trait de persistencia del engine.
struct FlagStorage<'a>(&'a mut dyn eframe::Storage);

impl KeyValueStore for FlagStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIO (solo visible durante el quiz y resultados)
        if matches!(self.state, AppState::Quiz | AppState::Results) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let mut flags = FlagStorage(storage);
        self.engine.save_answered_flag(&mut flags);
    }
}
