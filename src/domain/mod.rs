//! Core business entities, repository traits, and the visit recorder.

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;
