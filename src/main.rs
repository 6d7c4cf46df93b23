use log::{error, info};
use quiz_store::QuizApp;
use quiz_store::app::load_error_message;
use quiz_store::config::ViewerConfig;
use quiz_store::model::AppState;
use quiz_store::store::QuizStore;

/// Carga el quiz antes de abrir la ventana; devuelve el error como texto para la UI.
fn load_quiz(store: &mut QuizStore<AppState>, url: &str) -> Option<String> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => return Some(format!("no se pudo crear el runtime: {e}")),
    };

    match runtime.block_on(store.fetch_data(url)) {
        Ok(()) => {
            info!(
                "quiz cargado desde {url}: {} preguntas",
                store.session().questions.len()
            );
            None
        }
        Err(e) => {
            error!("error al cargar el quiz desde {url}: {e}");
            Some(load_error_message(&e, url))
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from_env();
    let mut store: QuizStore<AppState> = QuizStore::new();
    store.set_title(config.title.clone());
    store.set_stage(AppState::Welcome);

    let load_error = load_quiz(&mut store, &config.url);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(
                QuizApp::new(store, load_error).with_repaint_on_change(cc.egui_ctx.clone()),
            ))
        }),
    )
}
