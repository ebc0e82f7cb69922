pub mod ai;
pub mod auth;
pub mod orders;
pub mod profiles;
pub mod reviews;
pub mod services;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (register/login are public; /me needs a valid JWT) ──
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Service catalog (listing and detail are public, the rest need a JWT).
    //    /my-services must be registered before /{id} or it would match as an id. ──
    cfg.service(
        web::scope("/services")
            .route("/my-services", web::get().to(services::get_my_services))
            .route("", web::get().to(services::get_services))
            .route("", web::post().to(services::create_service))
            .route("/{id}", web::get().to(services::get_service))
            .route("/{id}", web::delete().to(services::delete_service)),
    );

    // ── Order routes (all protected) ──
    cfg.service(
        web::scope("/orders")
            .route("/my-orders", web::get().to(orders::get_my_orders))
            .route("/{service_id}", web::post().to(orders::place_order)),
    );

    // ── Review routes (protected; reviews are create-only) ──
    cfg.service(
        web::scope("/reviews").route("/{service_id}", web::post().to(reviews::submit_review)),
    );

    // ── Profile routes (all protected) ──
    cfg.service(
        web::scope("/profiles")
            .route("/me", web::get().to(profiles::get_my_profile))
            .route("/me", web::put().to(profiles::update_my_profile)),
    );

    // ── AI helper (public) ──
    cfg.service(
        web::scope("/ai").route("/generate-description", web::get().to(ai::generate_description)),
    );
}
