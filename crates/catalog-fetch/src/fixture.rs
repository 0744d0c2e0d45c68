//! In-memory item source for offline runs and tests.

use std::path::Path;
use std::time::Duration;

use catalog_core::entities::Item;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::{ItemSource, client::parse_items, error::FetchError};

/// One scripted fetch outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Items(Vec<Item>),
    Failure(String),
}

/// Replays a fixed sequence of snapshots every time it is fetched.
///
/// An optional per-snapshot delay makes the sequence arrive over time, which
/// is how a slow or streaming backend looks to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct StaticItemSource {
    snapshots: Vec<Snapshot>,
    delay: Option<Duration>,
}

impl StaticItemSource {
    /// A source that yields `items` as its only snapshot.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            snapshots: vec![Snapshot::Items(items)],
            delay: None,
        }
    }

    /// A source whose only outcome is a failure.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            snapshots: vec![Snapshot::Failure(message.into())],
            delay: None,
        }
    }

    /// A source that replays `snapshots` in order.
    #[must_use]
    pub const fn scripted(snapshots: Vec<Snapshot>) -> Self {
        Self {
            snapshots,
            delay: None,
        }
    }

    /// Wait `delay` before yielding each snapshot.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Load a single snapshot from a JSON file in the API's listing format.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Io`] if the file cannot be read and
    /// [`FetchError::Parse`] if it is not a JSON array of items.
    pub fn from_json_file(path: &Path) -> Result<Self, FetchError> {
        let body = std::fs::read_to_string(path)?;
        Ok(Self::new(parse_items(&body)?))
    }
}

impl ItemSource for StaticItemSource {
    fn fetch(&self) -> BoxStream<'static, Result<Vec<Item>, FetchError>> {
        let delay = self.delay;
        futures::stream::iter(self.snapshots.clone())
            .then(move |snapshot| async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                match snapshot {
                    Snapshot::Items(items) => Ok(items),
                    Snapshot::Failure(message) => Err(FetchError::Source(message)),
                }
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use futures::TryStreamExt;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn yields_single_snapshot() {
        let source = StaticItemSource::new(vec![Item::new("1", "MacBook Pro")]);
        let snapshots: Vec<Vec<Item>> = source.fetch().try_collect().await.unwrap();
        assert_eq!(snapshots, vec![vec![Item::new("1", "MacBook Pro")]]);
    }

    #[tokio::test]
    async fn failing_source_yields_source_error() {
        let source = StaticItemSource::failing("offline");
        let results: Vec<_> = source.fetch().collect().await;
        assert_eq!(results.len(), 1);
        assert!(matches!(&results[0], Err(FetchError::Source(m)) if m == "offline"));
    }

    #[tokio::test]
    async fn stream_is_lazy_and_repeatable() {
        let source = StaticItemSource::scripted(vec![
            Snapshot::Items(vec![Item::new("1", "a")]),
            Snapshot::Failure("blip".into()),
            Snapshot::Items(vec![Item::new("1", "a"), Item::new("2", "b")]),
        ]);

        for _ in 0..2 {
            let results: Vec<_> = source.fetch().collect().await;
            assert_eq!(results.len(), 3);
            assert!(results[1].is_err());
            assert_eq!(results[2].as_ref().map(Vec::len).ok(), Some(2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delay_applies_before_each_snapshot() {
        let source = StaticItemSource::new(vec![]).with_delay(Duration::from_secs(1));
        let start = tokio::time::Instant::now();
        let _: Vec<_> = source.fetch().collect().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn loads_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"1","name":"MacBook Pro","data":{{"color":"Silver"}}}}]"#).unwrap();

        let source = StaticItemSource::from_json_file(file.path()).unwrap();
        assert_eq!(source.snapshots.len(), 1);
        match &source.snapshots[0] {
            Snapshot::Items(items) => assert_eq!(items[0].name, "MacBook Pro"),
            Snapshot::Failure(m) => panic!("unexpected failure snapshot: {m}"),
        }
    }

    #[test]
    fn missing_fixture_is_io_error() {
        let err = StaticItemSource::from_json_file(Path::new("/nonexistent/catalog.json"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
