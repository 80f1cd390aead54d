//! Store and repository tests

mod repository_test;
