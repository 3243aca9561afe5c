use crate::QuizApp;
use crate::config::Config;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Punto de entrada web: monta la app sobre el canvas `canvas_id`.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&canvas_id))
        .ok_or_else(|| JsValue::from_str("no se encontró el canvas"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let config = Config::from_env();
    log::info!("Endpoint de preguntas: {}", config.endpoint);

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
        )
        .await
}
