use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Maximum number of products to return; all products when absent.
    pub limit: Option<i64>,
}

impl ProductListQuery {
    pub fn normalize(&self) -> AppResult<Option<u64>> {
        match self.limit {
            None => Ok(None),
            Some(limit) => u64::try_from(limit)
                .map(Some)
                .map_err(|_| AppError::BadRequest("limit must not be negative".to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeywordQuery {
    /// Substring to look for; matches everything when empty.
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    pub fn required(self) -> AppResult<String> {
        self.email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Email parameter is required".to_string()))
    }
}
