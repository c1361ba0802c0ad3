use snafu::ResultExt;

use crate::{
    Response, Result,
    error::error::{BodySnafu, FailedRequestSnafu, SendSnafu},
};

#[derive(Debug)]
pub struct RequestBuilder(pub(crate) reqwest_middleware::RequestBuilder);

impl RequestBuilder {
    /// This method will check the status of the response and return an error if it fails
    pub async fn send(self) -> Result<Response> {
        let response = self.0.send().await.context(SendSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            return FailedRequestSnafu {
                url: url.clone(),
                status,
                body: response.text().await.context(BodySnafu { url })?,
            }
            .fail();
        }

        Ok(Response(response))
    }
}
