use super::*;

pub(super) const API_KEY_HEADER: &str = "x-api-key";

impl ApiClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("unauthorized (token invalid/expired; run `snapfeed login --token ...`)");
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::AUTHORIZATION, self.auth())
    }

    pub(super) fn put(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .put(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::AUTHORIZATION, self.auth())
    }
}
