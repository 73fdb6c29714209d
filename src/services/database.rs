use anyhow::{Context, Result};
use surrealdb::engine::any::{self, Any};
use surrealdb::Surreal;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::models::user::{User, UserForm};

/// Projection that flattens the record id down to its key so it
/// deserializes straight into `User::id`.
const USER_FIELDS: &str = "record::id(id) AS id, name, email, password";

#[derive(Clone)]
pub struct DatabaseService {
    db: Surreal<Any>,
}

impl DatabaseService {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = any::connect(config.url.as_str())
            .await
            .with_context(|| format!("failed to connect to {}", config.url))?;

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        let service = Self { db };
        service.initialize_schema().await?;

        Ok(service)
    }

    async fn initialize_schema(&self) -> Result<()> {
        // Schemaless: records carry whichever of name/email/password were submitted.
        self.db
            .query("DEFINE TABLE IF NOT EXISTS users SCHEMALESS;")
            .await?
            .check()?;

        log::info!("Database schema initialized successfully");
        Ok(())
    }

    pub async fn create_user(&self, form: UserForm) -> Result<User> {
        // v7 keys sort by creation time, so a table scan lists users in insertion order.
        let id = Uuid::now_v7().to_string();

        self.db
            .query("CREATE type::thing('users', $id) SET name = $name, email = $email, password = $password RETURN NONE")
            .bind(("id", id.clone()))
            .bind(("name", form.name.clone()))
            .bind(("email", form.email.clone()))
            .bind(("password", form.password.clone()))
            .await?
            .check()?;

        log::debug!("Created user {}", id);
        Ok(User::new(id, form))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self
            .db
            .query(format!("SELECT {USER_FIELDS} FROM users"))
            .await?
            .take(0)?;
        Ok(users)
    }

    pub async fn get_user(&self, user_id: &Uuid) -> Result<Option<User>> {
        let user: Option<User> = self
            .db
            .query(format!("SELECT {USER_FIELDS} FROM type::thing('users', $id)"))
            .bind(("id", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(user)
    }

    /// Overwrites name, email and password of an existing record. Returns the
    /// record as stored afterwards, or `None` if no record has that id.
    pub async fn update_user(&self, user_id: &Uuid, form: UserForm) -> Result<Option<User>> {
        // The WHERE form never creates a record for an unknown id.
        let mut response = self
            .db
            .query("BEGIN TRANSACTION;")
            .query(
                "UPDATE users SET name = $name, email = $email, password = $password \
                 WHERE id = type::thing('users', $id) RETURN NONE;",
            )
            .query(format!("SELECT {USER_FIELDS} FROM type::thing('users', $id);"))
            .query("COMMIT TRANSACTION;")
            .bind(("id", user_id.to_string()))
            .bind(("name", form.name))
            .bind(("email", form.email))
            .bind(("password", form.password))
            .await?
            .check()?;

        let updated: Option<User> = response.take(1)?;
        if updated.is_some() {
            log::debug!("Updated user {}", user_id);
        }
        Ok(updated)
    }

    /// Removes a record. Returns what was removed, or `None` if no record has that id.
    pub async fn delete_user(&self, user_id: &Uuid) -> Result<Option<User>> {
        // BEGIN/COMMIT produce no results, so the read is statement 0.
        let mut response = self
            .db
            .query("BEGIN TRANSACTION;")
            .query(format!("SELECT {USER_FIELDS} FROM type::thing('users', $id);"))
            .query("DELETE type::thing('users', $id);")
            .query("COMMIT TRANSACTION;")
            .bind(("id", user_id.to_string()))
            .await?
            .check()?;

        let deleted: Option<User> = response.take(0)?;
        if deleted.is_some() {
            log::debug!("Deleted user {}", user_id);
        }
        Ok(deleted)
    }
}
