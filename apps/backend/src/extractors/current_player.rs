use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::AppError;

/// Authenticated caller, taken from the claims `JwtExtract` verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPlayer {
    pub id: Uuid,
    pub name: String,
}

impl From<Claims> for CurrentPlayer {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
        }
    }
}

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        ready(
            claims
                .map(CurrentPlayer::from)
                .ok_or_else(AppError::unauthorized_missing_bearer),
        )
    }
}
