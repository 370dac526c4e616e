/// HTTP handlers for blog endpoints
///
/// This module contains handlers for:
/// - Posts: Create, read, update, delete posts
/// - Comments: Create and list comments nested under a post
///
/// Route wiring lives in [`configure`] so the binary and the integration
/// tests build the exact same application.
pub mod comments;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Static landing page served at the application root.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(
        "\n  <p>Mollitia expedita sunt et quisquam ut.</p>\n  <p>Eos eaque recusandae aliquid repellat.</p>\n  ",
    )
}

/// Service health summary backed by a database round-trip.
pub async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service",
        })),
    }
}

/// Mount all routes: the landing page, the health check, and the post and
/// comment resources under `/api/posts`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .service(
                    web::resource("/{post_id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                )
                .service(
                    web::resource("/{post_id}/comments")
                        .route(web::get().to(comments::get_post_comments))
                        .route(web::post().to(comments::create_comment)),
                ),
        );
}
