// storefront/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{cart_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the integration tests) to configure services for the Actix App.
// Every `/cart` handler takes an `AuthenticatedUser`, so the whole scope is gated.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .service(web::resource("").route(web::get().to(product_handlers::list_products_handler)))
          .service(web::resource("/{product_id}").route(web::get().to(product_handlers::get_product_handler))),
      )
      .service(
        web::scope("/cart")
          .service(
            web::resource("")
              .route(web::get().to(cart_handlers::list_cart_handler))
              .route(web::post().to(cart_handlers::add_to_cart_handler)),
          )
          .service(
            web::resource("/{cart_item_id}")
              .route(web::put().to(cart_handlers::update_cart_item_handler))
              .route(web::delete().to(cart_handlers::remove_cart_item_handler)),
          ),
      ),
  );
}
