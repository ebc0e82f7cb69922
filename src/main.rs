use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use skillswap_backend::ai::DescriptionGenerator;
use skillswap_backend::auth::jwt::JwtConfig;
use skillswap_backend::create_pool;
use skillswap_backend::handlers;
use skillswap_backend::upload::UploadDir;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    let jwt_config = web::Data::new(JwtConfig::from_env());
    let generator = web::Data::new(DescriptionGenerator::from_env());

    let upload_dir = UploadDir::from_env();
    std::fs::create_dir_all(&upload_dir.0).expect("Failed to create upload directory");
    let uploads_path = upload_dir.0.clone();
    let upload_data = web::Data::new(upload_dir);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwt_config.clone())
            .app_data(generator.clone())
            .app_data(upload_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/uploads", uploads_path.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
