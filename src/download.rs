//! Fetch-and-write for the image catalog.

pub mod client;
pub mod file;
pub mod manager;
pub mod outcome;
pub mod single;
