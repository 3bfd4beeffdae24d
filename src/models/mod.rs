//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL del CMMS.

pub mod breakdown;
pub mod contract;
pub mod fmd_metrics;
pub mod work_order;
