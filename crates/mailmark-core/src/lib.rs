//! Mailmark Core Library
//!
//! Turns raw messages into clean Markdown items: HTML conversion, quote and
//! signature removal, link extraction and thread consolidation, composed by
//! a configurable pipeline.

pub mod config;
pub mod error;
pub mod html;
pub mod item;
pub mod links;
pub mod logging;
pub mod pipeline;
pub mod text;
pub mod thread;
