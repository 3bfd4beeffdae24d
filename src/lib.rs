//! Backend del CMMS: métricas FMD de fiabilidad y reglas de facturación
//! de órdenes de trabajo, expuestas sobre una API HTTP.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
