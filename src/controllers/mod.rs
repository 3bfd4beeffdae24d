pub mod breakdown_controller;
pub mod contract_controller;
pub mod fmd_controller;
pub mod work_order_controller;
