pub mod account;
pub mod chart;
pub mod dashboard;
pub mod portfolio;
pub mod price;
pub mod token;
pub mod transaction;
pub mod view;
