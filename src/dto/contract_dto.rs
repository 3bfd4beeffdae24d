use serde::Serialize;

use crate::models::contract::Contract;

// Sitios con contrato activo
#[derive(Debug, Serialize)]
pub struct ActiveSitesResponse {
    pub sites: Vec<String>,
}

// Resultado del recálculo de estados
#[derive(Debug, Serialize)]
pub struct RefreshStatusResponse {
    pub evaluated: usize,
    pub updated: u64,
}

// Contratos que vencen dentro de la ventana
#[derive(Debug, Serialize)]
pub struct ExpiringContractsResponse {
    pub window_days: i64,
    pub contracts: Vec<Contract>,
}
