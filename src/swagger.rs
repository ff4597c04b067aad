use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::DrawStatus;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::draw::create_draw,
        handlers::draw::get_draws,
        handlers::draw::get_draw,
        handlers::draw::close_draw,
        handlers::draw::get_results,
        handlers::ticket::create_ticket,
    ),
    components(
        schemas(
            DrawStatus,
            DrawResponse,
            TicketResponse,
            CreateTicketRequest,
            DrawResultsResponse,
            ApiError,
        )
    ),
    tags(
        (name = "draw", description = "Draw lifecycle and results API"),
        (name = "ticket", description = "Ticket purchase API"),
    ),
    info(
        title = "Lottery Backend API",
        version = "1.0.0",
        description = "Single-draw lottery REST API documentation"
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_lottery_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/draws",
            "/draws/{draw_id}",
            "/draws/{draw_id}/close",
            "/draws/{draw_id}/results",
            "/tickets",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}"
            );
        }
    }
}
