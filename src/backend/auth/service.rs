/**
 * Auth Service
 *
 * Registration and login on top of the user repository.
 *
 * # Registration Process
 *
 * 1. Trim NIK, name and email; every field must be present
 * 2. Check that the NIK is not taken
 * 3. Validate the email shape and parse the position into the fixed set
 * 4. Hash the password with bcrypt on the blocking pool
 * 5. Insert the employee; losing an insert race to the same NIK is a conflict
 *
 * # Security
 *
 * - Passwords are hashed with the configured bcrypt cost and never returned
 * - Unknown NIK and wrong password produce the same 401 message, and both
 *   run one bcrypt verification
 * - Tokens are HS256 JWTs valid for one hour
 */

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::auth::sessions::{Claims, TokenKeys};
use crate::backend::error::ApiError;
use crate::backend::server::config::AuthConfig;
use crate::backend::users::repository::{is_blank, USER_EXISTS};
use crate::backend::users::UserRepository;
use crate::shared::{EmployeeRecord, LoginRequest, Position, RegisterRequest};

const INVALID_CREDENTIALS: &str = "Invalid NIK or Password.";

/// Hashed on first use; unknown-NIK logins verify against it
const DUMMY_PASSWORD: &str = "unknown-nik-placeholder";

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    keys: TokenKeys,
    bcrypt_cost: u32,
    dummy_hash: OnceCell<String>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, config: &AuthConfig) -> Self {
        Self {
            users,
            keys: TokenKeys::new(&config.jwt_secret),
            bcrypt_cost: config.bcrypt_cost,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Register a new employee
    ///
    /// # Returns
    /// The created employee without its password
    ///
    /// # Errors
    /// * `InvalidArgument` - missing or blank field, malformed email or unknown position
    /// * `Conflict` - the NIK is already registered, whatever the other fields hold
    /// * `PersistenceError` / `LookupError` - store failure
    pub async fn register(&self, request: RegisterRequest) -> Result<EmployeeRecord, ApiError> {
        let RegisterRequest { nik, name, email, password, position } = request;
        let (nik, name, email) = (nik.trim(), name.trim(), email.trim());

        if [nik, name, email, position.as_str()].into_iter().any(is_blank) || password.is_empty() {
            tracing::warn!("Registration rejected: missing fields");
            return Err(ApiError::invalid_argument("All fields are required."));
        }

        if self.users.find_by_nik(nik).await?.is_some() {
            tracing::warn!("Registration rejected: {} already exists", nik);
            return Err(ApiError::conflict(USER_EXISTS));
        }

        if !email.contains('@') {
            tracing::warn!("Registration rejected: invalid email for {}", nik);
            return Err(ApiError::invalid_argument("Invalid email format."));
        }

        let position: Position = position.parse()?;

        let hashed_password = self.hash_password(password).await?;
        let record = match self.users.create(nik, name, email, &hashed_password, position).await {
            Ok(record) => record,
            Err(err @ ApiError::PersistenceError(_)) => {
                // A concurrent registration may have inserted the NIK after our check
                return match self.users.find_by_nik(nik).await {
                    Ok(Some(_)) => {
                        tracing::warn!("Registration rejected: {} was registered concurrently", nik);
                        Err(ApiError::conflict(USER_EXISTS))
                    }
                    _ => Err(err),
                };
            }
            Err(err) => return Err(err),
        };

        tracing::info!("Registered employee {}", record.nik);
        Ok(record)
    }

    /// Check credentials and issue a session token
    ///
    /// # Errors
    /// * `InvalidArgument` - NIK or password missing
    /// * `Unauthorized` - unknown NIK or wrong password (same message for both)
    pub async fn login(&self, request: LoginRequest) -> Result<String, ApiError> {
        let nik = request.nik.trim();
        if nik.is_empty() || request.password.is_empty() {
            return Err(ApiError::invalid_argument("NIK and Password are required."));
        }

        let Some(employee) = self.users.find_by_nik(nik).await? else {
            let dummy = self.dummy_hash().await?;
            self.verify_password(request.password, dummy.clone()).await?;
            tracing::warn!("Login failed: unknown NIK");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.verify_password(request.password, employee.password.clone()).await? {
            tracing::warn!("Login failed: wrong password for {}", employee.nik);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.keys.create_token(&employee.nik).map_err(|e| {
            tracing::error!("Token creation failed: {}", e);
            ApiError::internal("Error logging in.")
        })?;

        tracing::info!("Employee {} logged in", employee.nik);
        Ok(token)
    }

    /// Decode and validate a session token
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        self.keys.verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            ApiError::unauthorized("Invalid or expired token.")
        })
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, ApiError> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                tracing::error!("Password verification task failed: {}", e);
                ApiError::internal("Error logging in.")
            })?
            .map_err(|e| {
                tracing::error!("Stored password hash is unreadable: {}", e);
                ApiError::internal("Error logging in.")
            })
    }

    async fn dummy_hash(&self) -> Result<&String, ApiError> {
        self.dummy_hash
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD.to_string()))
            .await
    }

    async fn hash_password(&self, password: String) -> Result<String, ApiError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {}", e);
                ApiError::internal("Error registering user.")
            })?
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                ApiError::internal("Error registering user.")
            })
    }
}
