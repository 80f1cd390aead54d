/**
 * SQL User Repository
 *
 * The single implementation of `UserRepository` shared by every sqlx
 * backend. Backends differ only in their pool type and placeholder syntax,
 * so each one supplies its `Queries` and expands `sql_user_repository!`.
 *
 * Every round-trip runs under the configured query timeout.
 */

/// Statement text for one backend
pub(crate) struct Queries {
    pub find_by_nik: &'static str,
    pub find_all: &'static str,
    pub insert: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// Define a repository struct over `$pool` running `$queries`.
///
/// `insert` binds nik, name, email, password, position; `update` binds name,
/// email, position, nik; `find_by_nik` and `delete` bind nik.
macro_rules! sql_user_repository {
    ($(#[$meta:meta])* $name:ident, $pool:ty, $queries:expr) => {
        $(#[$meta])*
        pub struct $name {
            pool: $pool,
            query_timeout: ::std::time::Duration,
        }

        impl $name {
            const QUERIES: $crate::backend::users::sql::Queries = $queries;

            pub fn new(pool: $pool, query_timeout: ::std::time::Duration) -> Self {
                Self { pool, query_timeout }
            }
        }

        #[::async_trait::async_trait]
        impl $crate::backend::users::repository::UserRepository for $name {
            async fn find_by_nik(
                &self,
                nik: &str,
            ) -> Result<Option<$crate::backend::users::model::Employee>, $crate::backend::error::ApiError> {
                use $crate::backend::users::repository::{lookup_failed, require_nik_for_lookup};

                require_nik_for_lookup(nik)?;

                $crate::backend::store::with_timeout(
                    self.query_timeout,
                    ::sqlx::query_as::<_, $crate::backend::users::model::Employee>(Self::QUERIES.find_by_nik)
                        .bind(nik)
                        .fetch_optional(&self.pool),
                )
                .await
                .map_err(|e| lookup_failed("Error fetching user by NIK.", e))
            }

            async fn find_all(
                &self,
            ) -> Result<Vec<$crate::backend::users::model::Employee>, $crate::backend::error::ApiError> {
                use $crate::backend::users::repository::lookup_failed;

                $crate::backend::store::with_timeout(
                    self.query_timeout,
                    ::sqlx::query_as::<_, $crate::backend::users::model::Employee>(Self::QUERIES.find_all)
                        .fetch_all(&self.pool),
                )
                .await
                .map_err(|e| lookup_failed("Error fetching all users.", e))
            }

            async fn create(
                &self,
                nik: &str,
                name: &str,
                email: &str,
                hashed_password: &str,
                position: $crate::shared::Position,
            ) -> Result<$crate::shared::EmployeeRecord, $crate::backend::error::ApiError> {
                use $crate::backend::users::repository::{persistence_failed, require_create_fields};

                require_create_fields(nik, name, email, hashed_password)?;

                $crate::backend::store::with_timeout(
                    self.query_timeout,
                    ::sqlx::query(Self::QUERIES.insert)
                        .bind(nik)
                        .bind(name)
                        .bind(email)
                        .bind(hashed_password)
                        .bind(position.as_str())
                        .execute(&self.pool),
                )
                .await
                .map_err(|e| persistence_failed("Error creating user.", e))?;

                ::tracing::info!("Created employee {}", nik);

                Ok($crate::shared::EmployeeRecord {
                    nik: nik.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    position,
                })
            }

            async fn update(
                &self,
                nik: &str,
                name: &str,
                email: &str,
                position: $crate::shared::Position,
            ) -> Result<$crate::shared::EmployeeRecord, $crate::backend::error::ApiError> {
                use $crate::backend::users::repository::{
                    persistence_failed, require_update_fields, USER_NOT_FOUND,
                };

                require_update_fields(nik, name, email)?;

                let result = $crate::backend::store::with_timeout(
                    self.query_timeout,
                    ::sqlx::query(Self::QUERIES.update)
                        .bind(name)
                        .bind(email)
                        .bind(position.as_str())
                        .bind(nik)
                        .execute(&self.pool),
                )
                .await
                .map_err(|e| persistence_failed("Error updating user.", e))?;

                if result.rows_affected() == 0 {
                    return Err($crate::backend::error::ApiError::not_found(USER_NOT_FOUND));
                }

                Ok($crate::shared::EmployeeRecord {
                    nik: nik.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    position,
                })
            }

            async fn delete(&self, nik: &str) -> Result<(), $crate::backend::error::ApiError> {
                use $crate::backend::users::repository::{
                    persistence_failed, require_nik_for_delete, USER_NOT_FOUND,
                };

                require_nik_for_delete(nik)?;

                let result = $crate::backend::store::with_timeout(
                    self.query_timeout,
                    ::sqlx::query(Self::QUERIES.delete)
                        .bind(nik)
                        .execute(&self.pool),
                )
                .await
                .map_err(|e| persistence_failed("Error deleting user.", e))?;

                if result.rows_affected() == 0 {
                    return Err($crate::backend::error::ApiError::not_found(USER_NOT_FOUND));
                }

                ::tracing::info!("Deleted employee {}", nik);
                Ok(())
            }
        }
    };
}

pub(crate) use sql_user_repository;
