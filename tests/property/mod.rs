//! Property-based tests
//!
//! Generated employees driven through the router and the repository.

mod employee_proptest;
