use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::{Result, error::error::DecodeSnafu};

#[derive(Debug)]
pub struct Response(pub(crate) reqwest::Response);

impl Response {
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let url = self.0.url().clone();
        self.0.json().await.context(DecodeSnafu { url })
    }
}
