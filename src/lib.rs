// ABOUTME: Library crate for genie-onboard exposing the public API for testing and the binary

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod backend;
pub mod cli;
pub mod components;
pub mod config;
pub mod widgets;
pub mod wizard;
