use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret used to sign bearer tokens
    pub auth_secret: String,
    /// Admin account seeded at startup
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    /// Webhook URL for contact notifications; none disables delivery
    pub contact_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            auth_secret: env::var("AUTH_SECRET").expect("AUTH_SECRET must be set"),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin-password-change-me".to_string()),
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string()),
            contact_webhook_url: env::var("CONTACT_WEBHOOK_URL").ok(),
        }
    }
}
