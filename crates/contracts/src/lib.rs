//! Types shared between the perks frontend and backend.

pub mod domain;
pub mod shared;
