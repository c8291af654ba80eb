use actix_files::Files;
use actix_web::{http::StatusCode, middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";

struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

/// Forward an `/api/*` request to the reservation backend and relay its answer
async fn forward_api(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let target = match req.uri().path_and_query() {
        Some(path_and_query) => format!("{}{}", state.backend_url, path_and_query.as_str()),
        None => format!("{}{}", state.backend_url, req.path()),
    };

    let Ok(method) = reqwest::Method::from_bytes(req.method().as_str().as_bytes()) else {
        return HttpResponse::MethodNotAllowed().finish();
    };

    let mut upstream = state.client.request(method, &target).body(body.to_vec());
    if let Some(content_type) = req
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
    {
        upstream = upstream.header("content-type", content_type);
    }

    let response = match upstream.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Proxy request to {target} failed: {e}");
            return HttpResponse::BadGateway().body(format!("Backend unreachable: {e}"));
        }
    };

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match response.bytes().await {
        Ok(bytes) => {
            let mut builder = HttpResponse::build(status);
            if let Some(content_type) = content_type {
                builder.insert_header(("content-type", content_type));
            }
            builder.body(bytes.to_vec())
        }
        Err(e) => {
            log::error!("Failed to read backend response from {target}: {e}");
            HttpResponse::BadGateway().body(format!("Failed to read backend response: {e}"))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let backend_url = env::var("BACKEND_URL")
        .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    log::info!("Starting server on 0.0.0.0:{port}, proxying /api to {backend_url}");

    let state = web::Data::new(ProxyState {
        client: reqwest::Client::new(),
        backend_url,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").default_service(web::route().to(forward_api)))
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
