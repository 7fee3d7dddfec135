use axum::extract::{FromRequestParts, Query};

use crate::error::ErrorServer;

/// `Query` whose rejections are reported as an `ErrorServer` JSON body.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ErrorServer))]
pub struct ApiQuery<T>(pub T);
