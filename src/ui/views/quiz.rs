use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 420.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    // 1) Cabecera: posición y cronómetro
                    ui.heading(format!(
                        "Question {} of {}",
                        app.question_number_1based(),
                        app.total_questions()
                    ));

                    // Cronómetro de la pregunta. La señal compartida lo deja
                    // parado la primera vez que la pregunta queda completa;
                    // deseleccionar después no lo rearranca.
                    let now = ctx.input(|i| i.time);
                    if app.question_started_at.is_none() {
                        app.question_started_at = Some(now);
                    }
                    if app.timer_stop.get() && app.question_stopped_at.is_none() {
                        app.question_stopped_at = Some(now);
                    }
                    let started = app.question_started_at.unwrap_or(now);
                    let elapsed = app.question_stopped_at.unwrap_or(now) - started;
                    ui.label(format!("⏱ {elapsed:.1} s"));
                    if app.question_stopped_at.is_none() {
                        // sigue corriendo: repintar para verlo avanzar
                        ctx.request_repaint();
                    }

                    ui.add_space(8.0);

                    // 2) Enunciado
                    let prompt = app
                        .current_question()
                        .map(|q| q.prompt.clone())
                        .unwrap_or_default();
                    ui.label(RichText::new(prompt).strong());
                    ui.add_space(12.0);

                    // 3) Botones de opciones
                    let rows = app.option_rows();
                    let btn_w = (panel_width * 0.9).clamp(160.0, 520.0);
                    let btn_h = 40.0;
                    let mut clicked: Option<usize> = None;
                    for row in &rows {
                        if big_list_button(ui, row.label(), btn_w, btn_h, true) {
                            clicked = Some(row.idx);
                        }
                        ui.add_space(6.0);
                    }
                    if let Some(idx) = clicked {
                        app.handle_option_click(idx);
                    }

                    ui.add_space(10.0);

                    // 4) Mensaje de guía publicado por el engine. Tras un
                    //    click de este mismo frame ya refleja el estado nuevo.
                    ui.label(app.engine.guidance_message());

                    ui.add_space(14.0);

                    // 5) Navegación
                    let next_label = if app.is_last_question() {
                        "Show Results ▶"
                    } else {
                        "Next ▶"
                    };
                    let (back, forward) =
                        two_button_row(ui, panel_width.min(440.0), "◀ Previous", next_label);
                    if back {
                        app.previous_question();
                    }
                    if forward {
                        app.advance_question();
                    }
                });
            });

        ui.add_space(extra_space / 4.0);
    });
}
