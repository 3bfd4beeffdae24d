pub mod breakdown_repository;
pub mod contract_repository;
pub mod work_order_repository;
