//! Shared test helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use admin_panel_lib::clients::{build_http_client, AdminClient, PageClient};
use admin_panel_lib::UserPrompt;
use common::HttpClientConfig;
use wiremock::MockServer;

/// Prompt that replays scripted answers and records alerts.
#[derive(Default)]
pub struct ScriptedPrompt {
    confirm: bool,
    answers: Mutex<VecDeque<Option<String>>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            ..Default::default()
        }
    }

    pub fn answering(answers: &[&str]) -> Self {
        Self {
            confirm: true,
            answers: Mutex::new(answers.iter().map(|a| Some(a.to_string())).collect()),
            ..Default::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.confirm
    }

    fn prompt_text(&self, _message: &str) -> Option<String> {
        self.answers.lock().unwrap().pop_front().flatten()
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Client configuration pointing at a mock server.
pub fn config_for(server: &MockServer) -> HttpClientConfig {
    HttpClientConfig {
        base_url: server.uri(),
        request_timeout_ms: None,
    }
}

/// Admin and page clients sharing one cookie jar.
pub fn clients_for(server: &MockServer) -> (Arc<AdminClient>, Arc<PageClient>) {
    let config = config_for(server);
    let http = build_http_client(&config).unwrap();
    (
        Arc::new(AdminClient::new(http.clone(), config.clone())),
        Arc::new(PageClient::new(http, config, "/admin/users")),
    )
}
