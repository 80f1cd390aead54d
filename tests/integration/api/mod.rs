//! API integration tests

mod auth_test;
mod routes_test;
mod users_test;
