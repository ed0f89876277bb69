//! Database bootstrap
//!
//! Creates the schema at startup with idempotent statements so a fresh
//! database is usable without a separate migration step.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::error::DomainError;

/// Create all tables and indexes if they do not exist yet
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            long_description TEXT,
            image TEXT NOT NULL,
            images TEXT NOT NULL DEFAULT '[]',
            tags TEXT NOT NULL DEFAULT '[]',
            tech_stack TEXT NOT NULL DEFAULT '[]',
            languages TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'completed',
            difficulty TEXT NOT NULL DEFAULT 'intermediate',
            category TEXT NOT NULL DEFAULT 'fullstack',
            live_url TEXT,
            github_url TEXT,
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            year INTEGER NOT NULL,
            duration TEXT,
            team_size INTEGER,
            role TEXT,
            challenges TEXT NOT NULL DEFAULT '[]',
            solutions TEXT NOT NULL DEFAULT '[]',
            results TEXT NOT NULL DEFAULT '[]',
            metrics TEXT NOT NULL DEFAULT '[]',
            published BOOLEAN NOT NULL DEFAULT FALSE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'other',
            level INTEGER NOT NULL DEFAULT 1,
            years_of_experience INTEGER NOT NULL DEFAULT 0,
            icon TEXT,
            description TEXT,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            company TEXT NOT NULL,
            content TEXT NOT NULL,
            rating INTEGER NOT NULL DEFAULT 5,
            image TEXT,
            project TEXT,
            verified BOOLEAN NOT NULL DEFAULT FALSE,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL,
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'admin',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_projects_published ON projects (published)",
        "CREATE INDEX IF NOT EXISTS idx_skills_published ON skills (published)",
        "CREATE INDEX IF NOT EXISTS idx_testimonials_published ON testimonials (published)",
        "CREATE INDEX IF NOT EXISTS idx_contact_messages_read ON contact_messages (read)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(DatabaseBackend::Postgres, sql))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }

    Ok(())
}
