use crate::conf::Credentials;
use crate::http::{HTTPError, HTTPResult};
use crate::reddit::auth::Token;
use crate::reddit::client::Session;
use crate::reddit::service::Service;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Serves canned responses from `tests/data` and remembers every request.
pub struct TestService {
    token_file: &'static str,
    offline: bool,
    pages: HashMap<String, &'static str>,
    requests: Mutex<Vec<(String, String)>>,
}

impl TestService {
    /// Responds to token requests with the contents of `token_file`.
    pub fn new(token_file: &'static str) -> Self {
        Self {
            token_file,
            offline: false,
            pages: HashMap::new(),
            requests: Mutex::new(vec![]),
        }
    }

    /// Responds to GET requests for `uri` with the contents of `file`.
    ///
    /// Requests for any other URI get a 404.
    pub fn page(mut self, uri: impl Into<String>, file: &'static str) -> Self {
        self.pages.insert(uri.into(), file);
        self
    }

    /// Fails every token request as though Reddit could not be reached.
    pub fn offline(self) -> Self {
        Self {
            offline: true,
            ..self
        }
    }

    /// URIs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        let requests = self.requests.lock().expect("poisoned request log");
        requests.iter().map(|(uri, _)| uri.clone()).collect()
    }

    /// Authorization headers sent so far, in order.
    pub fn authorizations(&self) -> Vec<String> {
        let requests = self.requests.lock().expect("poisoned request log");
        requests.iter().map(|(_, auth)| auth.clone()).collect()
    }
}

impl Service for TestService {
    async fn access_token(&self, _credentials: &Credentials) -> HTTPResult<String> {
        if self.offline {
            Err(HTTPError::Http(StatusCode::SERVICE_UNAVAILABLE))
        } else {
            Ok(load_data(self.token_file))
        }
    }

    async fn get_resource(&self, uri: &str, token: &Token) -> HTTPResult<String> {
        self.requests
            .lock()
            .expect("poisoned request log")
            .push((uri.to_string(), token.authorization()));
        match self.pages.get(uri) {
            Some(file) => Ok(load_data(file)),
            None => Err(HTTPError::Http(StatusCode::NOT_FOUND)),
        }
    }
}

impl Credentials {
    /// Credentials that are never actually sent anywhere.
    pub fn test() -> Self {
        Credentials::new(
            "test-client-id",
            "test-client-secret",
            "testuserpleaseignore",
            "hunter2",
            "",
        )
    }
}

impl Session<TestService> {
    /// Returns a session that has logged in to `service`.
    pub async fn test(service: TestService) -> Self {
        Session::login_with_service(&Credentials::test(), service)
            .await
            .expect("could not log in to test service")
    }
}
