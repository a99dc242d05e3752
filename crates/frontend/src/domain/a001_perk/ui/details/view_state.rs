//! Perk Details - what to render.
//!
//! `render_model` turns the page state into one of three mutually exclusive
//! branches, with every display string already computed. `view.rs` only
//! maps this onto markup.

use super::theme::{resolve_theme, PerkCategory, PerkTheme};
use super::view_model::PerkDetailsState;
use crate::shared::date_utils::format_long_date;
use contracts::shared::routes::{perk_edit_path, PERKS_PATH};

pub const NOT_FOUND_MESSAGE: &str = "Perk not found";
pub const DELETE_LABEL: &str = "Delete Perk";
pub const DELETING_LABEL: &str = "Deleting…";

#[derive(Debug, Clone, PartialEq)]
pub enum PerkDetailsView {
    Loading,
    /// Load failed or there is no perk. Only a way back is offered.
    Missing { message: String, back_href: &'static str },
    Loaded(LoadedView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedView {
    pub theme: &'static PerkTheme,
    pub title: String,
    pub category_label: String,
    /// e.g. "20%"; `None` when there is no positive discount.
    pub discount_badge: Option<String>,
    pub merchant: Option<String>,
    pub description: Option<String>,
    /// Long en-US date, e.g. "January 5, 2024".
    pub created: Option<String>,
    pub back_href: &'static str,
    pub edit_href: String,
    pub delete_label: &'static str,
    pub delete_disabled: bool,
    /// Inline message after a failed delete.
    pub error: Option<String>,
}

pub fn render_model(state: &PerkDetailsState) -> PerkDetailsView {
    if state.loading {
        return PerkDetailsView::Loading;
    }

    let Some(perk) = &state.perk else {
        let message = if state.error.is_empty() {
            NOT_FOUND_MESSAGE.to_string()
        } else {
            state.error.clone()
        };
        return PerkDetailsView::Missing {
            message,
            back_href: PERKS_PATH,
        };
    };

    let category = Some(perk.category.as_str()).filter(|c| !c.trim().is_empty());
    let id = state.id.as_ref().unwrap_or(&perk.id);

    PerkDetailsView::Loaded(LoadedView {
        theme: resolve_theme(category),
        title: perk.title.clone(),
        category_label: category
            .unwrap_or(PerkCategory::default().as_str())
            .to_string(),
        discount_badge: perk.visible_discount().map(format_percent),
        merchant: perk.merchant().map(str::to_string),
        description: perk.description().map(str::to_string),
        created: perk.created_at().and_then(format_long_date),
        back_href: PERKS_PATH,
        edit_href: perk_edit_path(id.as_str()),
        delete_label: if state.deleting {
            DELETING_LABEL
        } else {
            DELETE_LABEL
        },
        delete_disabled: state.deleting,
        error: Some(state.error.clone()).filter(|e| !e.is_empty()),
    })
}

/// "20%" for whole numbers, "12.5%" otherwise.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::ApiError;
    use super::*;
    use contracts::domain::a001_perk::aggregate::{Perk, PerkId};

    fn coffee() -> Perk {
        Perk {
            id: PerkId::from("42"),
            title: "Coffee".into(),
            category: "food".into(),
            discount_percent: Some(20.0),
            merchant: Some("Cafe X".into()),
            description: Some("Free refill with every cup".into()),
            created_at: Some("2024-01-05T00:00:00Z".into()),
        }
    }

    fn loaded_state(perk: Perk) -> PerkDetailsState {
        let mut state = PerkDetailsState::default();
        let ticket = state.begin_load(Some(perk.id.clone())).unwrap();
        assert!(state.apply_load(&ticket, Ok(perk)));
        state
    }

    fn failed_state(error: ApiError) -> PerkDetailsState {
        let mut state = PerkDetailsState::default();
        let ticket = state.begin_load(Some("42".into())).unwrap();
        assert!(state.apply_load(&ticket, Err(error)));
        state
    }

    fn expect_loaded(view: PerkDetailsView) -> LoadedView {
        match view {
            PerkDetailsView::Loaded(loaded) => loaded,
            other => panic!("expected loaded view, got {other:?}"),
        }
    }

    #[test]
    fn loading_takes_precedence() {
        assert_eq!(
            render_model(&PerkDetailsState::default()),
            PerkDetailsView::Loading
        );
    }

    #[test]
    fn loaded_coffee_shows_every_block() {
        let view = expect_loaded(render_model(&loaded_state(coffee())));

        assert_eq!(view.title, "Coffee");
        assert_eq!(view.theme, resolve_theme(Some("food")));
        assert_eq!(view.category_label, "food");
        assert_eq!(view.discount_badge.as_deref(), Some("20%"));
        assert_eq!(view.merchant.as_deref(), Some("Cafe X"));
        assert_eq!(
            view.description.as_deref(),
            Some("Free refill with every cup")
        );
        assert_eq!(view.created.as_deref(), Some("January 5, 2024"));
        assert_eq!(view.edit_href, "/perks/42/edit");
        assert_eq!(view.back_href, "/perks");
        assert_eq!(view.delete_label, DELETE_LABEL);
        assert!(!view.delete_disabled);
        assert_eq!(view.error, None);
    }

    #[test]
    fn load_failure_shows_message_and_back_link() {
        let state = failed_state(ApiError::Server {
            status: 404,
            message: Some("Perk not found".into()),
        });
        assert_eq!(
            render_model(&state),
            PerkDetailsView::Missing {
                message: "Perk not found".into(),
                back_href: "/perks",
            }
        );
    }

    #[test]
    fn load_failure_without_message_is_never_blank() {
        let state = failed_state(ApiError::Server {
            status: 500,
            message: None,
        });
        match render_model(&state) {
            PerkDetailsView::Missing { message, .. } => {
                assert_eq!(message, "Failed to load perk")
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn absent_perk_without_error_reads_not_found() {
        let mut state = PerkDetailsState::default();
        assert!(state.begin_load(None).is_none());
        match render_model(&state) {
            PerkDetailsView::Missing { message, .. } => assert_eq!(message, NOT_FOUND_MESSAGE),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn zero_or_missing_discount_has_no_badge() {
        let zero = Perk {
            discount_percent: Some(0.0),
            ..coffee()
        };
        let missing = Perk {
            discount_percent: None,
            ..coffee()
        };
        assert_eq!(expect_loaded(render_model(&loaded_state(zero))).discount_badge, None);
        assert_eq!(expect_loaded(render_model(&loaded_state(missing))).discount_badge, None);
    }

    #[test]
    fn optional_blocks_are_omitted_independently() {
        let bare = Perk {
            merchant: None,
            description: Some(String::new()),
            created_at: None,
            ..coffee()
        };
        let view = expect_loaded(render_model(&loaded_state(bare)));
        assert_eq!(view.merchant, None);
        assert_eq!(view.description, None);
        assert_eq!(view.created, None);
        assert_eq!(view.title, "Coffee");
    }

    #[test]
    fn unparseable_created_date_is_omitted() {
        let perk = Perk {
            created_at: Some("yesterday".into()),
            ..coffee()
        };
        assert_eq!(expect_loaded(render_model(&loaded_state(perk))).created, None);
    }

    #[test]
    fn unknown_or_blank_category_uses_default_theme() {
        let unknown = Perk {
            category: "gaming".into(),
            ..coffee()
        };
        let blank = Perk {
            category: String::new(),
            ..coffee()
        };
        let unknown_view = expect_loaded(render_model(&loaded_state(unknown)));
        assert_eq!(unknown_view.theme, resolve_theme(None));
        assert_eq!(unknown_view.category_label, "gaming");

        let blank_view = expect_loaded(render_model(&loaded_state(blank)));
        assert_eq!(blank_view.theme, resolve_theme(None));
        assert_eq!(blank_view.category_label, "other");
    }

    #[test]
    fn deleting_disables_trigger_and_changes_label() {
        let mut state = loaded_state(coffee());
        let ticket = state.begin_delete().unwrap();
        let view = expect_loaded(render_model(&state));
        assert_eq!(view.delete_label, DELETING_LABEL);
        assert!(view.delete_disabled);

        state.release_delete(&ticket);
        let view = expect_loaded(render_model(&state));
        assert_eq!(view.delete_label, DELETE_LABEL);
        assert!(!view.delete_disabled);
    }

    #[test]
    fn delete_failure_stays_in_loaded_branch_with_inline_error() {
        let mut state = loaded_state(coffee());
        let ticket = state.begin_delete().unwrap();
        state.apply_delete_failure(
            &ticket,
            &ApiError::Server {
                status: 409,
                message: Some("Cannot delete: in use".into()),
            },
        );
        state.release_delete(&ticket);

        let view = expect_loaded(render_model(&state));
        assert_eq!(view.error.as_deref(), Some("Cannot delete: in use"));
        assert_eq!(view.title, "Coffee");
        assert_eq!(view.discount_badge.as_deref(), Some("20%"));
        assert!(!view.delete_disabled);
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
