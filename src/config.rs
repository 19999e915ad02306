use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    /// When true, a city lookup with no listings answers 404 instead of an
    /// empty array.
    pub empty_city_is_not_found: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3001".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_minutes: env::var("TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| "10080".to_string())
                .parse()
                .expect("TOKEN_TTL_MINUTES must be a number"),
            empty_city_is_not_found: env::var("DESTINATION_EMPTY_AS_404")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
