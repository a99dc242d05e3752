//! Route paths shared by the client router and the API server.

/// Список перков (страница клиента).
pub const PERKS_PATH: &str = "/perks";

/// Префикс REST API перков.
pub const API_PERKS_PATH: &str = "/api/perks";

/// Страница просмотра перка.
pub fn perk_detail_path(id: &str) -> String {
    format!("{}/{}", PERKS_PATH, id)
}

/// Форма редактирования перка.
pub fn perk_edit_path(id: &str) -> String {
    format!("{}/{}/edit", PERKS_PATH, id)
}

/// Ресурс перка в API.
pub fn api_perk_path(id: &str) -> String {
    format!("{}/{}", API_PERKS_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_paths() {
        assert_eq!(perk_detail_path("42"), "/perks/42");
        assert_eq!(perk_edit_path("42"), "/perks/42/edit");
        assert_eq!(api_perk_path("42"), "/api/perks/42");
    }
}
