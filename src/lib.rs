//! Core logic of the CaptionLagbe caption-browsing app, lifted out of the
//! page and put behind explicit ports: a key-value storage backend, a user
//! store with a demo auth layer on top of it, and the caption grid's
//! filter/like pipeline. Presentation is a trait boundary, so the whole
//! crate runs against in-memory fakes.

pub mod auth;
pub mod captions;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod theme;
pub mod toast;
