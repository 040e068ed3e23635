//! Remote Collection State
//!
//! One controller for the fetch/loading/error/in-memory-update state
//! machine every admin page repeats.

use leptos::*;

/// Records addressable by their server-assigned id.
pub trait HasId {
    fn id(&self) -> i64;
}

/// State of one remotely fetched list.
///
/// `loading` starts true so pages render their placeholder before the first
/// response arrives. All transitions go through the non-panicking signal
/// accessors: a response landing after the owning page was torn down is
/// dropped instead of writing to discarded state.
pub struct Collection<T: 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

// Signal handles are plain copies whatever T is, so a derive's implicit
// `T: Copy` bound would be wrong here.
impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<T> {}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    /// Apply the outcome of a list fetch: success replaces the rows,
    /// failure stores the message. Either way the page stops loading.
    pub fn resolve(&self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.items.try_set(items);
                self.error.try_set(None);
            }
            Err(message) => {
                self.error.try_set(Some(message));
            }
        }
        self.loading.try_set(false);
    }

    /// Append a created record without re-fetching the list.
    pub fn append(&self, item: T) {
        self.items.try_update(|items| items.push(item));
    }

    /// Prepend a created record without re-fetching the list.
    pub fn prepend(&self, item: T) {
        self.items.try_update(|items| items.insert(0, item));
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + HasId> Collection<T> {
    /// Replace the row matching the record's id with the server's returned
    /// representation, leaving every other row untouched. Last write wins;
    /// unknown ids are ignored.
    pub fn replace(&self, updated: T) {
        self.items.try_update(|items| {
            if let Some(slot) = items.iter_mut().find(|item| item.id() == updated.id()) {
                *slot = updated;
            }
        });
    }

    /// Remove the row with the given id.
    pub fn remove(&self, id: i64) {
        self.items.try_update(|items| items.retain(|item| item.id() != id));
    }
}

/// Single-record variant of [`Collection`], used by detail headers.
pub struct Record<T: 'static> {
    pub value: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T> Clone for Record<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Record<T> {}

impl<T: Clone> Record<T> {
    pub fn new() -> Self {
        Self {
            value: create_rw_signal(None),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    /// Apply the outcome of a record fetch.
    pub fn resolve(&self, result: Result<T, String>) {
        match result {
            Ok(value) => {
                self.value.try_set(Some(value));
                self.error.try_set(None);
            }
            Err(message) => {
                self.error.try_set(Some(message));
            }
        }
        self.loading.try_set(false);
    }
}

impl<T: Clone> Default for Record<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    impl HasId for Row {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn row(id: i64, label: &str) -> Row {
        Row {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn starts_loading_with_no_rows() {
        let runtime = create_runtime();
        let list = Collection::<Row>::new();
        assert!(list.loading.get_untracked());
        assert!(list.items.get_untracked().is_empty());
        assert_eq!(list.error.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn resolve_success_replaces_rows_and_clears_loading() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a"), row(2, "b")]));
        assert!(!list.loading.get_untracked());
        assert_eq!(list.items.get_untracked().len(), 2);
        assert_eq!(list.error.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn resolve_failure_stores_the_message_and_keeps_rows_empty() {
        let runtime = create_runtime();
        let list = Collection::<Row>::new();
        list.resolve(Err("API error 500".to_string()));
        assert!(!list.loading.get_untracked());
        assert!(list.items.get_untracked().is_empty());
        assert_eq!(list.error.get_untracked().as_deref(), Some("API error 500"));
        runtime.dispose();
    }

    #[test]
    fn append_adds_exactly_one_row_at_the_end() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a"), row(2, "b")]));
        list.append(row(7, "created"));
        let items = list.items.get_untracked();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], row(7, "created"));
        runtime.dispose();
    }

    #[test]
    fn prepend_puts_the_new_row_first() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a")]));
        list.prepend(row(7, "created"));
        assert_eq!(list.items.get_untracked()[0].id, 7);
        runtime.dispose();
    }

    #[test]
    fn replace_touches_only_the_matching_row() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a"), row(2, "b"), row(3, "c")]));
        list.replace(row(3, "updated"));
        let items = list.items.get_untracked();
        assert_eq!(items[0], row(1, "a"));
        assert_eq!(items[1], row(2, "b"));
        assert_eq!(items[2], row(3, "updated"));
        runtime.dispose();
    }

    #[test]
    fn replace_with_an_unknown_id_changes_nothing() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a")]));
        list.replace(row(9, "stranger"));
        assert_eq!(list.items.get_untracked(), vec![row(1, "a")]);
        runtime.dispose();
    }

    #[test]
    fn remove_drops_exactly_the_matching_row() {
        let runtime = create_runtime();
        let list = Collection::new();
        list.resolve(Ok(vec![row(1, "a"), row(3, "c"), row(5, "e")]));
        list.remove(3);
        let items = list.items.get_untracked();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.id != 3));
        runtime.dispose();
    }

    #[test]
    fn record_resolves_to_a_value_or_an_error() {
        let runtime = create_runtime();
        let record = Record::new();
        assert!(record.loading.get_untracked());
        record.resolve(Ok(row(4, "d")));
        assert!(!record.loading.get_untracked());
        assert_eq!(record.value.get_untracked(), Some(row(4, "d")));

        let failed = Record::<Row>::new();
        failed.resolve(Err("API error 404".to_string()));
        assert_eq!(failed.value.get_untracked(), None);
        assert_eq!(
            failed.error.get_untracked().as_deref(),
            Some("API error 404")
        );
        runtime.dispose();
    }
}
