//! Service layer — every user-visible flow, one module each.

pub mod access;
pub mod chat;
pub mod cms;
pub mod composer;
pub mod generation;
pub mod intent;
pub mod library;
