#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    use diro_reservation::app::*;
    use diro_reservation::data::backend::ReservationBackend;
    use diro_reservation::settings::Settings;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match Settings::from_yaml("settings.yaml") {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings.yaml: {}", e);
            std::process::exit(1);
        }
    };

    match ReservationBackend::init(&settings) {
        Ok(client) => log::info!("Reservation backend at {}", client.base_url()),
        Err(e) => {
            log::error!("Failed to configure reservation backend: {}", e);
            std::process::exit(1);
        }
    }

    let conf = get_configuration(None).expect("failed to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function; see lib.rs for the hydrate entry point
}
