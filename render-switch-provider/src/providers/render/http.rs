//! Render HTTP 请求方法

use serde::Serialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::join_url;

use super::{PROVIDER_NAME, RenderProvider};

impl RenderProvider {
    /// 执行 GET 请求
    pub(crate) async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<(u16, String)> {
        let url = join_url(&self.base_url, path);
        let request = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .query(query);

        HttpUtils::execute_request(request, PROVIDER_NAME, "GET", &url).await
    }

    /// 执行 POST 请求
    pub(crate) async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(u16, String)> {
        let url = join_url(&self.base_url, path);
        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        HttpUtils::execute_request(request, PROVIDER_NAME, "POST", &url).await
    }

    /// Path segment for a service id.
    pub(crate) fn service_path(service_id: &str, action: &str) -> String {
        format!("/services/{}/{action}", urlencoding::encode(service_id))
    }
}
