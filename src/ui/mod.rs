// src/ui/mod.rs
pub mod accounts;
pub mod answers;
pub mod classification;
pub mod clusters;
pub mod dashboard;
pub mod login;
pub mod records;
pub mod risk_chart;
pub mod signup;
pub mod student;
pub mod upload;
