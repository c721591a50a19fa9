//! Session state and the events that update it

use crate::catalog::Catalog;
use crate::schema::{ui_text, GroupDefinition, Language, UiText, SHIP_GROUPS};
use crate::store::{Flag, OverrideEntry, OverrideStore, Storage};
use crate::view::{aggregate_materials, grouped_view, GroupView, MaterialTotals};

/// A discrete user or loader event
#[derive(Debug, Clone)]
pub enum Event {
    CatalogLoaded(Catalog),
    Toggle { id: String, flag: Flag },
    SetLanguage(Language),
    ToggleIncompleteFilter,
}

/// Everything a session owns. Built at startup, dropped at exit.
pub struct AppState<S: Storage> {
    catalog: Catalog,
    overrides: OverrideStore<S>,
    groups: &'static [&'static GroupDefinition],
    pub language: Language,
    pub show_incomplete_only: bool,
}

impl<S: Storage> AppState<S> {
    /// Start with an empty catalog; it arrives later via `Event::CatalogLoaded`
    pub fn new(storage: S, language: Language) -> Self {
        Self {
            catalog: Catalog::default(),
            overrides: OverrideStore::open(storage),
            groups: SHIP_GROUPS,
            language,
            show_incomplete_only: false,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::CatalogLoaded(catalog) => self.catalog = catalog,
            Event::Toggle { id, flag } => {
                self.overrides.toggle(&id, flag);
            }
            Event::SetLanguage(language) => self.language = language,
            Event::ToggleIncompleteFilter => self.show_incomplete_only = !self.show_incomplete_only,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overrides(&self) -> &OverrideStore<S> {
        &self.overrides
    }

    pub fn entry(&self, id: &str) -> OverrideEntry {
        self.overrides.get(id)
    }

    pub fn text(&self) -> &'static UiText {
        ui_text(self.language)
    }

    pub fn groups(&self) -> &'static [&'static GroupDefinition] {
        self.groups
    }

    pub fn grouped(&self) -> Vec<GroupView<'_>> {
        grouped_view(
            self.groups,
            &self.catalog,
            self.overrides.overrides(),
            self.show_incomplete_only,
        )
    }

    pub fn totals(&self) -> MaterialTotals {
        aggregate_materials(&self.catalog, self.overrides.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::store::MemoryStorage;

    fn state() -> AppState<MemoryStorage> {
        AppState::new(MemoryStorage::new(), Language::Kr)
            .with_catalog(parse_catalog("D1,Fubuki,吹雪,후부키,DD,70,3,1,0\nB1,Nagato,長門,나가토,BB,88,2,1,0"))
    }

    #[test]
    fn test_views_before_catalog_load_are_empty() {
        let mut state = AppState::new(MemoryStorage::new(), Language::En);
        assert!(state.grouped().is_empty());
        assert_eq!(state.totals(), MaterialTotals::default());

        state.apply(Event::CatalogLoaded(parse_catalog("D1,Fubuki,吹雪,후부키,DD,70,3,1,0")));
        assert_eq!(state.grouped().len(), 1);
        assert_eq!(state.totals().blueprint, 3);
    }

    #[test]
    fn test_toggle_updates_views() {
        let mut state = state();
        state.apply(Event::ToggleIncompleteFilter);
        state.apply(Event::Toggle {
            id: "D1".into(),
            flag: Flag::RemodelDone,
        });

        assert!(state.entry("D1").remodel_done);
        assert_eq!(state.totals().blueprint, 2);
        let titles: Vec<_> = state.grouped().iter().map(|g| g.group.title).collect();
        assert_eq!(titles, vec!["BB/BC"]);

        state.apply(Event::ToggleIncompleteFilter);
        assert_eq!(state.grouped().len(), 2);
    }

    #[test]
    fn test_overrides_survive_catalog_reload() {
        let mut state = state();
        state.apply(Event::Toggle {
            id: "D1".into(),
            flag: Flag::NotOwned,
        });
        state.apply(Event::CatalogLoaded(parse_catalog("B1,Nagato,長門,나가토,BB,88,2,1,0")));
        assert!(state.entry("D1").not_owned);

        state.apply(Event::CatalogLoaded(parse_catalog("D1,Fubuki,吹雪,후부키,DD,70,3,1,0")));
        assert!(state.grouped()[0].cards[0].flags.not_owned);
    }

    #[test]
    fn test_duplicate_ids_share_one_entry() {
        let mut state = AppState::new(MemoryStorage::new(), Language::En).with_catalog(parse_catalog(
            "D1,Fubuki,吹雪,후부키,DD,70,3,1,0\nB1,Nagato,長門,나가토,BB,88,2,1,0\nD1,Fubuki B,吹雪,후부키,DD,70,4,2,0",
        ));
        assert_eq!(state.totals().blueprint, 9);

        state.apply(Event::Toggle {
            id: "D1".into(),
            flag: Flag::RemodelDone,
        });

        let groups = state.grouped();
        let dd: Vec<_> = groups
            .iter()
            .find(|g| g.group.title == "DD")
            .map(|g| g.cards.iter().map(|c| (c.ship.names.en.as_str(), c.flags.remodel_done)).collect())
            .unwrap_or_default();
        assert_eq!(dd, vec![("Fubuki", true), ("Fubuki B", true)]);
        assert_eq!(
            state.totals(),
            MaterialTotals {
                blueprint: 2,
                report: 1,
                catapult: 0
            }
        );

        state.apply(Event::ToggleIncompleteFilter);
        let titles: Vec<_> = state.grouped().iter().map(|g| g.group.title).collect();
        assert_eq!(titles, vec!["BB/BC"]);
    }

    #[test]
    fn test_language_switch_swaps_text() {
        let mut state = state();
        assert_eq!(state.text().title, "설계도표");
        state.apply(Event::SetLanguage(Language::En));
        assert_eq!(state.text().title, "Ship Remodel Status");
    }
}
