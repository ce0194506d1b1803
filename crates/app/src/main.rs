use base64::Engine;
use dioxus::prelude::*;

mod format_helpers;
mod routes;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

/// Page background, embedded so the image survives any asset pipeline.
const BACKGROUND_PNG: &[u8] = include_bytes!("../assets/bg.png");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        match server::config::load_config() {
            Ok(config) => {
                tracing::info!(endpoint = %config.search.endpoint, "Configuration loaded");
            }
            Err(e) => {
                eprintln!("[startup] {e}");
                std::process::exit(1);
            }
        }

        let router = dioxus::server::router(App)
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let background = base64::engine::general_purpose::STANDARD.encode(BACKGROUND_PNG);
    let background_css = format!(
        "body {{ background-image: url(data:image/png;base64,{background}); \
         background-size: cover; background-attachment: fixed; }}"
    );

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        document::Style { {background_css} }
        Router::<Route> {}
    }
}
