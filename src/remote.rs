use crate::data::parse_questions;
use crate::error::LoadError;
use crate::model::Question;
use std::sync::mpsc::{self, Receiver};

pub type FetchResult = Result<Vec<Question>, LoadError>;

/// Lanza la petición única de arranque. La UI consulta el canal en cada frame.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_question_fetch(endpoint: String) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel::<FetchResult>();
    log::info!("Cargando preguntas desde {endpoint}");

    std::thread::spawn(move || {
        let result = fetch_questions(&endpoint);
        let _ = tx.send(result);
    });

    rx
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_question_fetch(endpoint: String) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel::<FetchResult>();
    log::info!("Cargando preguntas desde {endpoint}");

    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_questions(&endpoint).await;
        let _ = tx.send(result);
    });

    rx
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(endpoint: &str) -> FetchResult {
    use reqwest::header::{ACCEPT, USER_AGENT};

    let transport = |err: reqwest::Error| LoadError::Transport {
        url: endpoint.to_string(),
        message: err.to_string(),
    };

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(endpoint)
        .header(USER_AGENT, "SentenceQuiz/0.1")
        .header(ACCEPT, "application/json")
        .send()
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http {
            url: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(transport)?;
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(endpoint: &str) -> FetchResult {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let transport = |err: JsValue| LoadError::Transport {
        url: endpoint.to_string(),
        message: format!("{err:?}"),
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(transport)?;
    let window = web_sys::window().ok_or_else(|| LoadError::Transport {
        url: endpoint.to_string(),
        message: "no existe window en entorno WASM".into(),
    })?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = resp_value.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: endpoint.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let body = text.as_string().ok_or_else(|| LoadError::Transport {
        url: endpoint.to_string(),
        message: "response.text() no devolvió string".into(),
    })?;

    parse_questions(&body)
}
