//! Perk Details UI Module (MVVM)
//!
//! Structure:
//! - model.rs: API client and injected browser capabilities
//! - theme.rs: category -> visual theme registry
//! - view_model.rs: PerkDetailsState transitions and PerkDetailsVm
//! - view_state.rs: pure projection of the state onto the three page branches
//! - view.rs: Main component PerkDetails

pub mod model;
pub mod theme;
mod view;
pub mod view_model;
pub mod view_state;

pub use view::PerkDetails;
pub use view_model::PerkDetailsVm;
