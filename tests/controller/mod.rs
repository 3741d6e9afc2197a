//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and their responses are checked for
//! status codes, while the `router` tests drive complete requests through the assembled router.

mod mission;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::station_user::Role;
use starbase_test_utils::prelude::*;

use crate::util::TestContextExt;
