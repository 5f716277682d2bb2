use crate::document::Document;
use crate::errors::AppError;
use crate::storage::LocalStorage;
use serde::Serialize;

pub const THEME_KEY: &str = "theme";
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_stored(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn apply(self, page: &mut Document) {
        match self {
            Theme::Light => page.add_body_class(LIGHT_CLASS),
            Theme::Dark => page.remove_body_class(LIGHT_CLASS),
        }
    }
}

#[derive(Debug)]
pub struct ThemeToggle {
    current: Theme,
    storage: LocalStorage,
}

impl ThemeToggle {
    pub async fn load(storage: LocalStorage) -> Self {
        let current = storage
            .get_item(THEME_KEY)
            .await
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default();
        Self { current, storage }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub async fn toggle(&mut self, page: &mut Document) -> Result<Theme, AppError> {
        let next = if page.has_body_class(LIGHT_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        };
        self.storage.set_item(THEME_KEY, next.as_str()).await?;
        next.apply(page);
        self.current = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_preference_is_dark() {
        let toggle = ThemeToggle::load(LocalStorage::in_memory()).await;
        assert_eq!(toggle.current(), Theme::Dark);

        let mut page = Document::default();
        toggle.current().apply(&mut page);
        assert!(!page.has_body_class(LIGHT_CLASS));
    }

    #[tokio::test]
    async fn toggling_twice_returns_to_dark() {
        let storage = LocalStorage::in_memory();
        let mut toggle = ThemeToggle::load(storage.clone()).await;
        let mut page = Document::default();
        toggle.current().apply(&mut page);

        assert_eq!(toggle.toggle(&mut page).await.unwrap(), Theme::Light);
        assert!(page.has_body_class(LIGHT_CLASS));
        assert_eq!(storage.get_item(THEME_KEY).await.as_deref(), Some("light"));

        assert_eq!(toggle.toggle(&mut page).await.unwrap(), Theme::Dark);
        assert!(!page.has_body_class(LIGHT_CLASS));
        assert_eq!(storage.get_item(THEME_KEY).await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn failed_persist_leaves_page_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("missing").join("storage.json")).await;
        let mut toggle = ThemeToggle::load(storage).await;
        let mut page = Document::default();
        toggle.current().apply(&mut page);

        assert!(toggle.toggle(&mut page).await.is_err());
        assert!(!page.has_body_class(LIGHT_CLASS));
        assert_eq!(toggle.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn stored_light_is_restored() {
        let storage = LocalStorage::in_memory();
        storage.set_item(THEME_KEY, "light").await.unwrap();
        let toggle = ThemeToggle::load(storage).await;
        assert_eq!(toggle.current(), Theme::Light);
    }

    #[test]
    fn unknown_stored_values_read_as_dark() {
        assert_eq!(Theme::from_stored("solarized"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
