// src/sheets/mod.rs

pub mod auth;
pub mod client;
pub mod facade;
pub mod factory;
pub mod service;

pub use client::{DEFAULT_API_BASE, SheetsClient};
pub use facade::SheetFacade;
pub use factory::ClientFactory;
pub use service::SpreadsheetService;
