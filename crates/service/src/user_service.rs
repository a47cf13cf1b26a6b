use sea_orm::DatabaseConnection;

use models::user::{self, UserInput};
use crate::errors::ServiceError;

/// List every user.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::list(db).await?)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::find(db, id).await?)
}

/// Create a user with a caller-chosen id.
pub async fn create_user(db: &DatabaseConnection, input: UserInput) -> Result<user::Model, ServiceError> {
    Ok(user::create(db, input).await?)
}

/// Overwrite every field of the user at `id`.
pub async fn replace_user(db: &DatabaseConnection, id: i32, input: UserInput) -> Result<user::Model, ServiceError> {
    Ok(user::replace(db, id, input).await?)
}

/// Hard-delete a user. Related orders and offers are left alone.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    user::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(id: i32) -> UserInput {
        UserInput {
            id,
            first_name: "Wanda".into(),
            last_name: "Mayer".into(),
            age: 41,
            email: "wanda@mail.com".into(),
            role: "executor".into(),
            phone: "+79184561234".into(),
        }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let u = create_user(&db, input(11)).await?;
        assert_eq!(u.first_name, "Wanda");

        let found = get_user(&db, 11).await?.unwrap();
        assert_eq!(found.id, 11);

        let mut changed = input(11);
        changed.phone = "+79180000000".into();
        let updated = replace_user(&db, 11, changed).await?;
        assert_eq!(updated.phone, "+79180000000");
        assert_eq!(list_users(&db).await?.len(), 1);

        delete_user(&db, 11).await?;
        assert!(get_user(&db, 11).await?.is_none());

        let err = delete_user(&db, 11).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
