use crate::QuizApp;
use crate::ui::layout::quiz_card;
use egui::{Button, Color32, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let session = app.store.session();
    let title = session.title.clone().unwrap_or_else(|| "Quiz".to_owned());
    let total = session.questions.len();

    quiz_card(ctx, &title, 260.0, 540.0, |ui| {
        ui.label(format!("Preguntas: {total}"));
        ui.add_space(18.0);

        if let Some(err) = &app.load_error {
            ui.label(RichText::new(format!("❌ {err}")).color(Color32::RED));
            ui.add_space(10.0);
        }

        let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
        if ui
            .add_enabled(total > 0, Button::new("▶ Empezar").min_size([btn_w, 40.0].into()))
            .clicked()
        {
            app.empezar_quiz();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
