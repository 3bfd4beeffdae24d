//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. Los
//! handlers construyen sus controladores a partir de aquí; la lógica
//! de negocio recibe los datos ya cargados.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
