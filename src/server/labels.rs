//! Label bookkeeping over a loaded article collection.
//!
//! Records move one way, unlabeled to labeled; the presence of the
//! `label` field is the only signal. Every applied label rewrites the
//! whole collection file immediately.

use rand::seq::IndexedRandom;

use crate::error::{CrawlError, LabelError};
use crate::extract::ArticleRecord;
use crate::sites::Site;
use crate::store::Store;

/// One record handed to the operator for labeling
#[derive(Debug, Clone)]
pub struct Picked {
    /// Index of the record in the persisted collection
    pub id: usize,
    pub record: ArticleRecord,
    /// Count of records still lacking a label (including this one)
    pub unlabeled: usize,
    /// Total records in the collection
    pub total: usize,
}

/// The article collection plus the store it persists to
pub struct LabelBook {
    store: Store,
    stem: &'static str,
    records: Vec<ArticleRecord>,
}

impl LabelBook {
    /// Load a site's article collection for labeling.
    ///
    /// The collection file must exist; labeling without a prior crawl is
    /// an operator error.
    pub fn load(store: Store, site: Site) -> Result<Self, CrawlError> {
        let stem = site.profile().stem;
        let records = store.load_articles(stem)?.ok_or_else(|| {
            CrawlError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no article collection for {site}; run a crawl first"),
            ))
        })?;
        ::log::info!("Loaded {} records for labeling ({})", records.len(), site);
        Ok(Self {
            store,
            stem,
            records,
        })
    }

    #[cfg(test)]
    pub fn from_records(store: Store, site: Site, records: Vec<ArticleRecord>) -> Self {
        Self {
            store,
            stem: site.profile().stem,
            records,
        }
    }

    /// Pick one unlabeled record uniformly at random
    pub fn pick_unlabeled(&self) -> Result<Picked, LabelError> {
        let unlabeled: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_labeled())
            .map(|(i, _)| i)
            .collect();

        let id = *unlabeled
            .choose(&mut rand::rng())
            .ok_or(LabelError::NoRecordsRemaining)?;

        Ok(Picked {
            id,
            record: self.records[id].clone(),
            unlabeled: unlabeled.len(),
            total: self.records.len(),
        })
    }

    /// Set the label on a record and persist the whole collection
    pub fn apply_label(&mut self, id: usize, label: String) -> Result<(), LabelError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or(LabelError::UnknownRecord(id))?;
        record.label = Some(label);
        self.store.save_articles(self.stem, &self.records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            url: format!("https://vnexpress.net/{title}-1.html"),
            cat: String::new(),
            desc: String::new(),
            detail: String::new(),
            label: None,
        }
    }

    fn book(records: Vec<ArticleRecord>) -> (LabelBook, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        (
            LabelBook::from_records(store, Site::VnExpress, records),
            dir,
        )
    }

    #[test]
    fn test_pick_skips_labeled_records() {
        let mut first = record("a");
        first.label = Some("sports".to_string());
        let (book, _dir) = book(vec![first, record("b")]);

        let picked = book.pick_unlabeled().unwrap();
        assert_eq!(picked.id, 1);
        assert_eq!(picked.unlabeled, 1);
        assert_eq!(picked.total, 2);
    }

    #[test]
    fn test_labeled_record_never_picked_again() {
        let (mut book, _dir) = book(vec![record("a"), record("b")]);

        book.apply_label(0, "politics".to_string()).unwrap();
        for _ in 0..20 {
            assert_eq!(book.pick_unlabeled().unwrap().id, 1);
        }
    }

    #[test]
    fn test_empty_unlabeled_subset_is_distinct_error() {
        let (mut book, _dir) = book(vec![record("a")]);
        book.apply_label(0, "world".to_string()).unwrap();

        assert!(matches!(
            book.pick_unlabeled(),
            Err(LabelError::NoRecordsRemaining)
        ));
    }

    #[test]
    fn test_apply_label_persists_collection() {
        let (mut book, dir) = book(vec![record("a"), record("b")]);
        book.apply_label(1, "sports".to_string()).unwrap();

        let reloaded = Store::new(dir.path())
            .load_articles("vne")
            .unwrap()
            .unwrap();
        assert_eq!(reloaded[1].label.as_deref(), Some("sports"));
        assert!(reloaded[0].label.is_none());
    }

    #[test]
    fn test_unknown_id_rejected() {
        let (mut book, _dir) = book(vec![record("a")]);
        assert!(matches!(
            book.apply_label(5, "x".to_string()),
            Err(LabelError::UnknownRecord(5))
        ));
    }
}
