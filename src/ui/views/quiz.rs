use crate::QuizApp;
use crate::ui::layout::{QuizAction, quiz_actions, quiz_card};
use egui::{Button, Context, ScrollArea, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.current_view() else {
        // Índice fuera de rango o sin fijar: no hay nada que enseñar
        app.volver_al_inicio();
        return;
    };
    let heading = format!(
        "Pregunta {} de {}",
        view.number,
        app.store.session().questions.len()
    );

    quiz_card(ctx, &heading, 420.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
            ui.label(&view.prompt);
        });

        if let Some(img) = &app.store.session().img {
            ui.add_space(4.0);
            ui.small(format!("🖼 {img}"));
        }
        ui.add_space(10.0);

        let mut elegida = None;
        if view.options.is_empty() {
            ui.add(
                TextEdit::singleline(&mut app.input)
                    .hint_text("Tu respuesta")
                    .desired_width(panel_width * 0.9),
            );
        } else {
            for option in &view.options {
                if ui
                    .add_sized([panel_width * 0.9, 32.0], Button::new(option.as_str()))
                    .clicked()
                {
                    elegida = Some(option.clone());
                }
                ui.add_space(4.0);
            }
        }

        ui.add_space(8.0);
        // Con opciones se responde pulsando una; "Enviar" solo vale para texto libre
        let can_send = view.options.is_empty() && !app.input.trim().is_empty();
        let action = quiz_actions(ui, panel_width, can_send);

        if let Some(option) = elegida {
            app.responder(&option);
        } else {
            match action {
                Some(QuizAction::Enviar) => {
                    let input = app.input.clone();
                    app.responder(&input);
                }
                Some(QuizAction::Saltar) => app.saltar_pregunta(),
                None => {}
            }
        }

        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
