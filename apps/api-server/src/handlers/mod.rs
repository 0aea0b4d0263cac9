//! HTTP handlers and route configuration.

mod blogs;
mod server;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(server::root))
        .route("/ping", web::get().to(server::ping))
        .service(
            web::scope("/blogs")
                .route("", web::get().to(blogs::list))
                .route("", web::post().to(blogs::create))
                .route("/{slug}", web::get().to(blogs::get_by_slug)),
        );
}
