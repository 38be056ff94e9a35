/**
 * Server Configuration
 *
 * This module loads server configuration from the environment, once at
 * process start. Everything downstream receives the resulting
 * `ServerConfig` value; nothing reads environment variables after
 * startup.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize are set to `None` and the server
 * continues without them.
 */

use sqlx::PgPool;

/// Default listen port, kept in sync with the URLs the pages link to
const DEFAULT_PORT: u16 = 5000;

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Stripe credentials
#[derive(Clone, Debug)]
pub struct StripeConfig {
    /// API secret key
    pub secret_key: String,
    /// Price id of the subscription plan
    pub price_id: String,
}

/// Server configuration collected from the environment
///
/// # Recognized Options
///
/// | Variable | Meaning |
/// |---|---|
/// | `JWT_SECRET` | Token signing secret |
/// | `DATABASE_URL` | Postgres connection string |
/// | `STRIPE_SECRET` | Stripe API secret key |
/// | `STRIPE_PRICE_ID` | Subscription price id |
/// | `PUBLIC_URL` | External base URL for Stripe redirects |
/// | `SERVER_PORT` | Listen port (default 5000) |
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Token signing secret
    pub jwt_secret: String,
    /// Postgres connection string, `None` disables the user store
    pub database_url: Option<String>,
    /// Stripe credentials, `None` disables checkout
    pub stripe: Option<StripeConfig>,
    /// Base URL clients are redirected back to after checkout
    pub public_url: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        }

        let stripe = match (
            std::env::var("STRIPE_SECRET"),
            std::env::var("STRIPE_PRICE_ID"),
        ) {
            (Ok(secret_key), Ok(price_id)) => Some(StripeConfig {
                secret_key,
                price_id,
            }),
            _ => {
                tracing::warn!("Stripe not configured. Checkout will be disabled.");
                None
            }
        };

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let public_url = std::env::var("PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        Self {
            jwt_secret,
            database_url,
            stripe,
            public_url,
            port,
        }
    }
}

/// Connect to the database and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if no connection string was given or the connection fails
///
/// Errors are logged but do not prevent server startup: the server runs
/// with the store disabled rather than refusing to serve pages.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let database_url = config.database_url.as_ref()?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Migrations might have already been applied by an earlier run.
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_matches_page_links() {
        assert_eq!(DEFAULT_PORT, 5000);
    }

    #[test]
    fn test_from_env_applies_defaults() {
        // from_env tolerates a completely empty environment.
        let config = ServerConfig::from_env();
        assert!(!config.jwt_secret.is_empty());
        assert!(config.public_url.starts_with("http"));
    }
}
