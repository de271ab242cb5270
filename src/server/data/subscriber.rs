use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{fetch_page, Page, PageRequest},
    util::time::now,
};

pub struct SubscriberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriberRepository<'a, C> {
    /// Creates a new instance of [`SubscriberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a subscriber; fails with a unique violation if the email is already subscribed
    pub async fn create(&self, email: String) -> Result<entity::subscriber::Model, DbErr> {
        let subscriber = entity::subscriber::ActiveModel {
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        };

        subscriber.insert(self.db).await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::subscriber::Model>, DbErr> {
        entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Lists subscribers newest first
    pub async fn list(&self, page: PageRequest) -> Result<Page<entity::subscriber::Model>, DbErr> {
        let select = entity::prelude::Subscriber::find()
            .order_by_desc(entity::subscriber::Column::CreatedAt)
            .order_by_desc(entity::subscriber::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Deletes a subscriber
    ///
    /// Returns OK regardless of the subscriber existing, to confirm the deletion result check
    /// the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscriber::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
