#![allow(missing_docs)]

pub(crate) mod server;
pub(crate) mod user;

pub(crate) use server::{get_test_server, log_in_new_user};
pub(crate) use user::{TEST_PASSWORD, insert_test_user};
