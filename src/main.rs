#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use sentence_quiz::QuizApp;
    use sentence_quiz::config::Config;

    pretty_env_logger::init();

    let config = Config::from_env();
    log::info!("Endpoint de preguntas: {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([820.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sentence Construction",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

// En WASM el arranque lo hace `web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
