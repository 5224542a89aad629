pub mod dto;
pub mod grouping;
pub mod model;
pub mod page;
pub mod queries;
pub mod routes;
pub mod store;
