//! Terminal front end for the Byline article browser.
//!
//! Drives the same view-state machines as the web app from `byline-shared`
//! against the live API and prints the cards as text.

pub mod cli;
pub mod commands;
pub mod render;
pub mod source;
pub mod store;
