pub mod ai;
pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod realtime;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::menu_service::MenuService;
use application::order_service::OrderService;
use infrastructure::menu_repo::DieselMenuRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};
pub use realtime::hub::BroadcastHub;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Concrete service types the handlers resolve from app data.
pub type AppOrderService = OrderService<DieselOrderRepository>;
pub type AppMenuService = MenuService<DieselMenuRepository>;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::list_orders,
        handlers::orders::update_order_status,
        handlers::menu::list_menu_items,
        handlers::menu::create_menu_item,
        handlers::menu::update_menu_item,
        handlers::menu::delete_menu_item,
        handlers::ai::customize,
        handlers::ai::suggest_action,
        handlers::health::health_check,
    ),
    components(schemas(
        handlers::orders::OrderItemDto,
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderResponse,
        handlers::orders::OrderResponse,
        handlers::orders::UpdateOrderRequest,
        handlers::menu::MenuItemRequest,
        handlers::menu::MenuItemResponse,
        handlers::ai::CustomizationRequest,
        handlers::ai::CustomizationResponse,
        handlers::ai::SuggestionRequest,
        handlers::ai::SuggestionResponse,
    ))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The hub is injected rather than owned so callers (and tests) can hold
/// on to it; the caller is responsible for `.await`-ing (or
/// `tokio::spawn`-ing) the returned server.
pub fn build_server(
    pool: DbPool,
    hub: Arc<BroadcastHub>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let order_service = web::Data::new(OrderService::new(
        DieselOrderRepository::new(pool.clone()),
        hub.clone(),
    ));
    let menu_service = web::Data::new(MenuService::new(
        DieselMenuRepository::new(pool),
        hub.clone(),
    ));
    let hub = web::Data::from(hub);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(order_service.clone())
            .app_data(menu_service.clone())
            .app_data(hub.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/api")
                    .route("/orders", web::post().to(handlers::orders::create_order))
                    .route("/orders", web::get().to(handlers::orders::list_orders))
                    .route("/orders/{id}", web::get().to(handlers::orders::get_order))
                    .route(
                        "/orders/{id}",
                        web::patch().to(handlers::orders::update_order_status),
                    )
                    .route("/menu", web::get().to(handlers::menu::list_menu_items))
                    .route("/menu", web::post().to(handlers::menu::create_menu_item))
                    .route("/menu/{id}", web::put().to(handlers::menu::update_menu_item))
                    .route(
                        "/menu/{id}",
                        web::delete().to(handlers::menu::delete_menu_item),
                    )
                    .route("/ai/customize", web::post().to(handlers::ai::customize))
                    .route(
                        "/ai/suggest_action",
                        web::post().to(handlers::ai::suggest_action),
                    )
                    .route("/health", web::get().to(handlers::health::health_check)),
            )
            .route("/ws", web::get().to(realtime::ws::serve_updates))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
