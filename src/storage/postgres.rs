//! PostgreSQL backend. Filtering and ordering are pushed into the
//! queries, and partial updates are single UPDATE statements so
//! concurrent writers cannot interleave a half-merged row.

use crate::forms;
use crate::models;
use crate::storage::{Storage, StorageError};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn list_active_properties(&self) -> Result<Vec<models::Property>, StorageError> {
        let query_span = tracing::info_span!("Fetch active properties.");
        let properties = sqlx::query_as::<_, models::Property>(
            r#"
            SELECT * FROM properties
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(properties)
    }

    async fn list_featured_properties(&self) -> Result<Vec<models::Property>, StorageError> {
        let query_span = tracing::info_span!("Fetch featured properties.");
        let properties = sqlx::query_as::<_, models::Property>(
            r#"
            SELECT * FROM properties
            WHERE is_active = TRUE AND is_featured = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(properties)
    }

    async fn get_property(&self, id: &str) -> Result<Option<models::Property>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let property = sqlx::query_as::<_, models::Property>(
            r#"SELECT * FROM properties WHERE id = $1 LIMIT 1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(property)
    }

    async fn create_property(
        &self,
        property: models::Property,
    ) -> Result<models::Property, StorageError> {
        let query_span = tracing::info_span!("Saving new property into the database");
        let property = sqlx::query_as::<_, models::Property>(
            r#"
            INSERT INTO properties
                (id, title, description, location, price, price_type, property_type,
                 bedrooms, bathrooms, parking_spaces, area, year_built, floor,
                 images, features, amenities,
                 agent_name, agent_phone, agent_email, agent_image,
                 is_featured, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
            RETURNING *
            "#,
        )
        .bind(property.id)
        .bind(property.title)
        .bind(property.description)
        .bind(property.location)
        .bind(property.price)
        .bind(property.price_type)
        .bind(property.property_type)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.parking_spaces)
        .bind(property.area)
        .bind(property.year_built)
        .bind(property.floor)
        .bind(property.images)
        .bind(property.features)
        .bind(property.amenities)
        .bind(property.agent_name)
        .bind(property.agent_phone)
        .bind(property.agent_email)
        .bind(property.agent_image)
        .bind(property.is_featured)
        .bind(property.is_active)
        .bind(property.created_at)
        .bind(property.updated_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(property)
    }

    async fn update_property(
        &self,
        id: &str,
        form: forms::PropertyUpdateForm,
    ) -> Result<Option<models::Property>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let query_span = tracing::info_span!("Updating property");
        // One statement: omitted fields keep their stored value via
        // COALESCE, and the row is merged atomically.
        let property = sqlx::query_as::<_, models::Property>(
            r#"
            UPDATE properties SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                price = COALESCE($5, price),
                price_type = COALESCE($6, price_type),
                property_type = COALESCE($7, property_type),
                bedrooms = COALESCE($8, bedrooms),
                bathrooms = COALESCE($9, bathrooms),
                parking_spaces = COALESCE($10, parking_spaces),
                area = COALESCE($11, area),
                year_built = COALESCE($12, year_built),
                floor = COALESCE($13, floor),
                images = COALESCE($14, images),
                features = COALESCE($15, features),
                amenities = COALESCE($16, amenities),
                agent_name = COALESCE($17, agent_name),
                agent_phone = COALESCE($18, agent_phone),
                agent_email = COALESCE($19, agent_email),
                agent_image = COALESCE($20, agent_image),
                is_featured = COALESCE($21, is_featured),
                is_active = COALESCE($22, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.title)
        .bind(form.description)
        .bind(form.location)
        .bind(form.price)
        .bind(form.price_type)
        .bind(form.property_type)
        .bind(form.bedrooms)
        .bind(form.bathrooms)
        .bind(form.parking_spaces)
        .bind(form.area)
        .bind(form.year_built)
        .bind(form.floor)
        .bind(form.images)
        .bind(form.features)
        .bind(form.amenities)
        .bind(form.agent_name)
        .bind(form.agent_phone)
        .bind(form.agent_email)
        .bind(form.agent_image)
        .bind(form.is_featured)
        .bind(form.is_active)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(property)
    }

    async fn soft_delete_property(&self, id: &str) -> Result<bool, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let result = sqlx::query(
            r#"UPDATE properties SET is_active = FALSE, updated_at = NOW() WHERE id = $1"#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_inquiries(&self) -> Result<Vec<models::Inquiry>, StorageError> {
        let inquiries = sqlx::query_as::<_, models::Inquiry>(
            r#"SELECT * FROM inquiries ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(inquiries)
    }

    async fn list_inquiries_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<models::Inquiry>, StorageError> {
        let Ok(property_id) = Uuid::parse_str(property_id) else {
            return Ok(Vec::new());
        };
        let query_span = tracing::info_span!("Fetch inquiries by property id.");
        let inquiries = sqlx::query_as::<_, models::Inquiry>(
            r#"SELECT * FROM inquiries WHERE property_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(inquiries)
    }

    async fn get_inquiry(&self, id: &str) -> Result<Option<models::Inquiry>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let inquiry =
            sqlx::query_as::<_, models::Inquiry>(r#"SELECT * FROM inquiries WHERE id = $1 LIMIT 1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(inquiry)
    }

    async fn create_inquiry(
        &self,
        inquiry: models::Inquiry,
    ) -> Result<models::Inquiry, StorageError> {
        let query_span = tracing::info_span!("Saving new inquiry into the database");
        let inquiry = sqlx::query_as::<_, models::Inquiry>(
            r#"
            INSERT INTO inquiries
                (id, property_id, name, email, phone, message, inquiry_type, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(inquiry.id)
        .bind(inquiry.property_id)
        .bind(inquiry.name)
        .bind(inquiry.email)
        .bind(inquiry.phone)
        .bind(inquiry.message)
        .bind(inquiry.inquiry_type)
        .bind(inquiry.status)
        .bind(inquiry.created_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(inquiry)
    }

    async fn update_inquiry(
        &self,
        id: &str,
        form: forms::InquiryUpdateForm,
    ) -> Result<Option<models::Inquiry>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let inquiry = sqlx::query_as::<_, models::Inquiry>(
            r#"
            UPDATE inquiries SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                message = COALESCE($5, message),
                inquiry_type = COALESCE($6, inquiry_type),
                status = COALESCE($7, status)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(form.name)
        .bind(form.email)
        .bind(form.phone)
        .bind(form.message)
        .bind(form.inquiry_type)
        .bind(form.status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(inquiry)
    }

    async fn list_conversations(&self) -> Result<Vec<models::ChatConversation>, StorageError> {
        let conversations = sqlx::query_as::<_, models::ChatConversation>(
            r#"SELECT * FROM chat_conversations ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(conversations)
    }

    async fn get_conversation_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<models::ChatConversation>, StorageError> {
        let conversation = sqlx::query_as::<_, models::ChatConversation>(
            r#"SELECT * FROM chat_conversations WHERE session_id = $1 LIMIT 1"#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(conversation)
    }

    async fn upsert_conversation(
        &self,
        conversation: models::ChatConversation,
    ) -> Result<models::ChatConversation, StorageError> {
        let query_span = tracing::info_span!("Upserting chat conversation");
        let conversation = sqlx::query_as::<_, models::ChatConversation>(
            r#"
            INSERT INTO chat_conversations
                (id, session_id, user_name, user_email, user_phone,
                 conversation_data, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (session_id)
            DO UPDATE SET user_name = EXCLUDED.user_name,
                          user_email = EXCLUDED.user_email,
                          user_phone = EXCLUDED.user_phone,
                          conversation_data = EXCLUDED.conversation_data,
                          status = EXCLUDED.status,
                          updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(conversation.id)
        .bind(conversation.session_id)
        .bind(conversation.user_name)
        .bind(conversation.user_email)
        .bind(conversation.user_phone)
        .bind(conversation.conversation_data)
        .bind(conversation.status)
        .bind(conversation.created_at)
        .bind(conversation.updated_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(conversation)
    }

    async fn update_conversation_by_session(
        &self,
        session_id: &str,
        form: forms::ConversationUpdateForm,
    ) -> Result<Option<models::ChatConversation>, StorageError> {
        let conversation = sqlx::query_as::<_, models::ChatConversation>(
            r#"
            UPDATE chat_conversations SET
                user_name = COALESCE($2, user_name),
                user_email = COALESCE($3, user_email),
                user_phone = COALESCE($4, user_phone),
                conversation_data = COALESCE($5, conversation_data),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE session_id = $1
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(form.user_name)
        .bind(form.user_email)
        .bind(form.user_phone)
        .bind(form.conversation_data)
        .bind(form.status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(conversation)
    }

    async fn get_user(&self, id: i32) -> Result<Option<models::User>, StorageError> {
        let user = sqlx::query_as::<_, models::User>(r#"SELECT * FROM users WHERE id = $1 LIMIT 1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<models::User>, StorageError> {
        let user = sqlx::query_as::<_, models::User>(
            r#"SELECT * FROM users WHERE username = $1 LIMIT 1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(
        &self,
        username: String,
        password: String,
    ) -> Result<models::User, StorageError> {
        let user = sqlx::query_as::<_, models::User>(
            r#"INSERT INTO users (username, password) VALUES ($1, $2) RETURNING *"#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn dashboard_stats(&self) -> Result<models::DashboardStats, StorageError> {
        let query_span = tracing::info_span!("Fetch dashboard counts.");
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM properties WHERE is_active = TRUE),
                (SELECT COUNT(*) FROM inquiries),
                (SELECT COUNT(*) FROM chat_conversations),
                (SELECT COUNT(*) FROM properties WHERE is_active = TRUE AND is_featured = TRUE)
            "#,
        )
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await?;
        Ok(models::DashboardStats {
            total_properties: row.0,
            total_inquiries: row.1,
            total_conversations: row.2,
            featured_properties: row.3,
        })
    }
}
