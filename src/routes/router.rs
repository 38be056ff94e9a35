/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * page routes and API routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (landing, login, protected dashboard)
 * 2. API routes (register, login, checkout)
 * 3. Fallback handler (404)
 *
 * CORS is applied to every route; the login page's fetch calls and any
 * external frontend depend on it.
 */

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::middleware::auth::require_auth;
use crate::pages;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Pages
///
/// - `GET /` - Landing page
/// - `GET /login` - Login page
/// - `GET /dashboard` - Dashboard (requires a session token)
///
/// ## API Routes
///
/// - `POST /api/register` - User registration
/// - `POST /api/login` - User login
/// - `POST /api/checkout` - Stripe checkout session
///
/// ## Fallback
///
/// The fallback handler returns 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", axum::routing::get(pages::landing))
        .route("/login", axum::routing::get(pages::login_page))
        .route(
            "/dashboard",
            axum::routing::get(pages::dashboard).route_layer(
                axum::middleware::from_fn_with_state(app_state.clone(), require_auth),
            ),
        );

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.layer(CorsLayer::permissive()).with_state(app_state)
}
