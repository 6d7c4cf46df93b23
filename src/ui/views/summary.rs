use crate::QuizApp;
use crate::view_models::AnswerRow;
use egui::{Button, CentralPanel, Context, Grid, ScrollArea};

pub fn ui_summary(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 50))
                .show(ui, |ui| {
                    ui.set_width(panel_width / 1.5);

                    ui.heading("¡Fin del quiz!");
                    ui.add_space(10.0);
                    ui.label("Respuestas en el orden en que se dieron:");
                    ui.add_space(5.0);

                    ScrollArea::vertical()
                        .max_height(400.0)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            let rows: Vec<AnswerRow> = app.answer_rows();

                            if rows.is_empty() {
                                ui.label("No has respondido ninguna pregunta.");
                                return;
                            }

                            Grid::new("quiz_answers_grid")
                                .striped(true)
                                .spacing([8.0, 0.0])
                                .show(ui, |ui| {
                                    ui.label("#");
                                    ui.label("Pregunta");
                                    ui.label("Respuesta");
                                    ui.end_row();

                                    for r in &rows {
                                        ui.label(r.position.to_string());
                                        ui.label(
                                            r.question_number
                                                .map(|n| n.to_string())
                                                .unwrap_or_else(|| "-".to_owned()),
                                        );
                                        ui.label(&r.answer);
                                        ui.end_row();
                                    }
                                });
                        });

                    ui.add_space(10.0);

                    if ui
                        .add_sized([button_width, button_height], Button::new("⟲ Volver a empezar"))
                        .clicked()
                    {
                        app.volver_al_inicio();
                    }
                });
        });
    });
}
