pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::time::Instant;

use crate::config::Environment;
use crate::database::store::QuizStore;
use crate::services::quiz_service::QuizService;

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
    pub environment: Environment,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: QuizStore) -> Self {
        Self {
            quiz_service: QuizService::new(store),
            environment: Environment::default(),
            started_at: Instant::now(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}
