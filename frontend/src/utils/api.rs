use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config;

/// Thin client for the content service.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        }
        .credentials(RequestCredentials::SameOrigin);

        Self {
            request,
            path: path.to_string(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await?;
        if !response.ok() {
            log::warn!("{} answered {}", self.path, response.status());
        }
        Ok(response)
    }

    /// Sends and decodes a 2xx JSON body; any other status is an error.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, GlooError> {
        let path = self.path.clone();
        let response = self.send().await?;
        if !response.ok() {
            return Err(GlooError::GlooError(format!(
                "{} returned status {}",
                path,
                response.status()
            )));
        }
        response.json::<T>().await
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}
