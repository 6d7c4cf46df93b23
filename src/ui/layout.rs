use crate::model::{AppState, QuizSession};
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};
use serde_json::Value;

/// Qué botón de la fila de acciones del quiz se pulsó.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Enviar,
    Saltar,
}

/// Texto de la barra inferior: versión cargada y progreso de respuestas.
pub fn status_line(session: &QuizSession<AppState>) -> String {
    let version = match &session.quiz_version {
        Value::Null => "sin versión".to_owned(),
        Value::String(s) => format!("versión {s}"),
        other => format!("versión {other}"),
    };
    format!(
        "{version} · {}/{} respuestas",
        session.answers.len(),
        session.questions.len()
    )
}

/// Estado del quiz a la izquierda, botones de tema a la derecha.
pub fn bottom_panel(session: &QuizSession<AppState>, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.small(status_line(session));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Tarjeta centrada con un encabezado; `inner` pinta el resto del contenido.
pub fn quiz_card(
    ctx: &Context,
    heading: &str,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(max_width));
                ui.vertical_centered(|ui| {
                    ui.heading(heading);
                    ui.add_space(10.0);
                    inner(ui);
                });
            });
        ui.add_space(extra);
    });
}

/// Fila "Enviar" / "Saltar pregunta". "Enviar" se deshabilita si no hay nada que mandar.
pub fn quiz_actions(ui: &mut Ui, panel_width: f32, can_send: bool) -> Option<QuizAction> {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut action = None;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        if ui
            .add_enabled(can_send, Button::new("Enviar").min_size([btn_w, 36.0].into()))
            .clicked()
        {
            action = Some(QuizAction::Enviar);
        }
        if ui
            .add_sized([btn_w, 36.0], Button::new("Saltar pregunta"))
            .clicked()
        {
            action = Some(QuizAction::Saltar);
        }
    });
    action
}
