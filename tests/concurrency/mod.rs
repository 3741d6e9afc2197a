//! Interleaved mission completions against a shared Postgres database.
//!
//! Requires a reachable Postgres instance, see `PostgresTest`.

use starbase_test_utils::prelude::*;

use crate::util::postgres::PostgresTest;

mod complete;
