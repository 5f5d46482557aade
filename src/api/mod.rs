//! Client for the scraping backend API

mod client;
mod scraping;

pub use client::*;
pub use scraping::*;
