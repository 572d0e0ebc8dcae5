//! Entity model tests

mod message_tests;
mod store_tests;
