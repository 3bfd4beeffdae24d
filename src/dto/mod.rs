pub mod api_response;
pub mod contract_dto;
pub mod invoicing_dto;
