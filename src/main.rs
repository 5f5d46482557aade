//! ScrapeSight - Dioxus Fullstack Web Application
//!
//! Browser front end for the ScrapeSight scraping/extraction backend: submit
//! a URL, get back structured data and AI-generated insights.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
