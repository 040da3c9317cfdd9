//! HTTP API handlers for capdash-ui

pub mod actions;
pub mod capture;
pub mod dataset;
pub mod health;
pub mod models;
pub mod ui;
