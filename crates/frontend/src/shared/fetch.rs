//! `use_fetch`: GET a resource path and expose `{ data, loading, error, refetch }`.

use crate::shared::api::{use_api, ApiError};
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out monotonically increasing tickets; only the latest ticket may
/// apply its response.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Reactive result of [`use_fetch`]
pub struct UseFetch<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    version: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for UseFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseFetch<T> {}

impl<T: Send + Sync + 'static> UseFetch<T> {
    /// Re-issue the request for the current path
    pub fn refetch(&self) {
        self.version.update(|v| *v += 1);
    }
}

/// Issues `GET path` on mount and whenever `path` changes.
///
/// Responses that resolve after a newer request was started are dropped.
pub fn use_fetch<T>(path: impl Into<Signal<String>>) -> UseFetch<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let client = use_api();
    let path = path.into();
    let handle = UseFetch {
        data: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        version: RwSignal::new(0),
    };
    let tracker = RequestTracker::default();

    Effect::new(move |_| {
        let path = path.get();
        handle.version.track();

        let ticket = tracker.begin();
        handle.loading.set(true);
        handle.error.set(None);

        let client = client.clone();
        let tracker = tracker.clone();
        spawn_local(async move {
            let result = client.get::<T>(&path).await;
            if !tracker.is_current(ticket) {
                log::debug!("discarding stale response for {}", path);
                return;
            }
            match result {
                Ok(data) => handle.data.set(Some(data)),
                Err(e) => handle.error.set(Some(e)),
            }
            handle.loading.set(false);
        });
    });

    handle
}

/// Page-owned entity list seeded from a fetch.
///
/// Every new response replaces `rows`; afterwards the page reconciles `rows`
/// itself (see `list_cache`). Fetch errors surface as one notification each.
pub fn use_resource_rows<T, R>(
    path: impl Into<Signal<String>>,
    extract: impl Fn(T) -> Vec<R> + Send + Sync + 'static,
) -> (RwSignal<Vec<R>>, UseFetch<T>)
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    let notifications = use_notifications();
    let fetch = use_fetch::<T>(path);
    let rows = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        if let Some(data) = fetch.data.get() {
            rows.set(extract(data));
        }
    });
    Effect::new(move |_| {
        if let Some(e) = fetch.error.get() {
            notifications.error(e.user_message());
        }
    });

    (rows, fetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client_with, reactive_runtime, settle, HeldTransport};
    use crate::shared::notifications::{NotificationKind, Notifications};
    use contracts::domain::a002_unit_of_measure::aggregate::UnitOfMeasure;
    use pretty_assertions::assert_eq;

    const KILOGRAM: &str = r#"[{"id":2,"name":"Kilogramo","abbreviation":"kg"}]"#;
    const POUND: &str = r#"[{"id":1,"name":"Libra","abbreviation":"lb"}]"#;

    fn provide_services(transport: &HeldTransport) -> Notifications {
        let notifications = Notifications::new();
        provide_context(client_with(Arc::new(transport.clone())));
        provide_context(notifications);
        notifications
    }

    fn ids(units: &Option<Vec<UnitOfMeasure>>) -> Vec<i64> {
        units.iter().flatten().map(|u| u.id).collect()
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let tracker = RequestTracker::default();
        let cloned = tracker.clone();
        let ticket = tracker.begin();
        assert!(cloned.is_current(ticket));
        cloned.begin();
        assert!(!tracker.is_current(ticket));
    }

    #[test]
    fn test_older_response_after_path_change_is_dropped() {
        let _owner = reactive_runtime();
        let transport = HeldTransport::new();
        provide_services(&transport);

        let path = RwSignal::new("/units?page=1".to_string());
        let fetch = use_fetch::<Vec<UnitOfMeasure>>(path);
        settle();
        assert!(fetch.loading.get_untracked());

        path.set("/units?page=2".to_string());
        settle();
        assert_eq!(
            transport.urls(),
            vec!["http://api.test/units?page=1", "http://api.test/units?page=2"]
        );

        transport.answer(1, 200, KILOGRAM);
        settle();
        transport.answer(0, 200, POUND);
        settle();

        assert_eq!(fetch.data.with_untracked(ids), vec![2]);
        assert!(!fetch.loading.get_untracked());
        assert_eq!(fetch.error.get_untracked(), None);
    }

    #[test]
    fn test_refetch_clears_previous_error() {
        let _owner = reactive_runtime();
        let transport = HeldTransport::new();
        provide_services(&transport);

        let fetch = use_fetch::<Vec<UnitOfMeasure>>("/units".to_string());
        settle();
        transport.answer(0, 500, r#"{"message":"Base de datos no disponible"}"#);
        settle();
        assert_eq!(
            fetch.error.get_untracked().map(|e| e.user_message()),
            Some("Base de datos no disponible".to_string())
        );
        assert!(!fetch.loading.get_untracked());

        fetch.refetch();
        settle();
        assert_eq!(transport.urls().len(), 2);
        assert_eq!(fetch.error.get_untracked(), None);
        assert!(fetch.loading.get_untracked());

        transport.answer(1, 200, KILOGRAM);
        settle();
        assert_eq!(fetch.data.with_untracked(ids), vec![2]);
    }

    #[test]
    fn test_resource_rows_follow_data_and_report_errors() {
        let _owner = reactive_runtime();
        let transport = HeldTransport::new();
        let notifications = provide_services(&transport);

        let path = RwSignal::new("/units".to_string());
        let (rows, _fetch) =
            use_resource_rows::<Vec<UnitOfMeasure>, UnitOfMeasure>(path, |units| units);
        settle();
        transport.answer(0, 200, POUND);
        settle();
        assert_eq!(rows.with_untracked(|r| r.iter().map(|u| u.id).collect::<Vec<_>>()), vec![1]);

        path.set("/units?status=ACTIVE".to_string());
        settle();
        transport.answer(1, 503, "");
        settle();

        let shown = notifications.current();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert_eq!(shown[0].message, "Request failed with status code 503");
        // a failed reload keeps the rows already on screen
        assert_eq!(rows.with_untracked(Vec::len), 1);
    }
}
