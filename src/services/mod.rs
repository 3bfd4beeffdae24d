//! Services module
//!
//! Lógica de negocio pura del CMMS. Los servicios reciben colecciones
//! ya cargadas por los repositorios y no tocan la base de datos.

pub mod contract_service;
pub mod fmd_metrics_service;
pub mod invoicing_service;

pub use fmd_metrics_service::{compute_metrics, MetricsError};
pub use invoicing_service::needs_invoicing;
