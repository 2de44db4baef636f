//! In-memory implementation of [`IncidentRepository`].

use tokio::sync::RwLock;

use incident_board_app::ports::{Deletion, IncidentRepository};
use incident_board_domain::error::IncidentError;
use incident_board_domain::id::IncidentId;
use incident_board_domain::incident::IncidentRecord;

/// Ordered incident sequence guarded by a single lock.
///
/// Reads share the lock; every mutation holds it exclusively for its whole
/// read-modify-write, so each call is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct InMemoryIncidentRepository {
    records: RwLock<Vec<IncidentRecord>>,
}

impl InMemoryIncidentRepository {
    /// Create a repository holding `records`, in order.
    #[must_use]
    pub fn new(records: Vec<IncidentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl IncidentRepository for InMemoryIncidentRepository {
    async fn get_all(&self) -> Result<Vec<IncidentRecord>, IncidentError> {
        Ok(self.records.read().await.clone())
    }

    async fn append(&self, record: IncidentRecord) -> Result<Vec<IncidentRecord>, IncidentError> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(records.clone())
    }

    async fn update_by_id(
        &self,
        id: &IncidentId,
        patch: IncidentRecord,
    ) -> Result<Option<IncidentRecord>, IncidentError> {
        let mut records = self.records.write().await;
        let Some(target) = records.iter_mut().find(|record| record.matches(id)) else {
            return Ok(None);
        };
        target.merge(patch);
        Ok(Some(target.clone()))
    }

    async fn delete_by_id(&self, id: &IncidentId) -> Result<Deletion, IncidentError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| !record.matches(id));
        Ok(Deletion {
            removed: before - records.len(),
            remaining: records.clone(),
        })
    }

    async fn count(&self) -> Result<usize, IncidentError> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn incident(id: &str, building: &str) -> IncidentRecord {
        IncidentRecord::new()
            .with("id", id)
            .with("building", building)
            .with("severity", "High")
    }

    fn unidentified(building: &str) -> IncidentRecord {
        IncidentRecord::new().with("building", building)
    }

    #[tokio::test]
    async fn should_list_in_insertion_order_after_appends() {
        let repo = InMemoryIncidentRepository::new(vec![unidentified("A"), unidentified("B")]);

        repo.append(incident("x1", "C")).await.unwrap();
        repo.append(incident("x2", "D")).await.unwrap();

        let buildings: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.get("building").cloned())
            .collect();
        assert_eq!(
            buildings,
            [
                Some(json!("A")),
                Some(json!("B")),
                Some(json!("C")),
                Some(json!("D"))
            ]
        );
    }

    #[tokio::test]
    async fn should_grow_by_one_whatever_the_record_shape() {
        let repo = InMemoryIncidentRepository::default();
        let shapes = [
            IncidentRecord::new(),
            IncidentRecord::new().with("id", 7),
            IncidentRecord::new().with("nested", json!({"a": [1, 2]})),
            incident("dup", "A"),
            incident("dup", "A"),
        ];

        for (n, shape) in shapes.into_iter().enumerate() {
            let all = repo.append(shape).await.unwrap();
            assert_eq!(all.len(), n + 1);
        }
    }

    #[tokio::test]
    async fn should_leave_record_identical_when_patch_is_empty() {
        let repo = InMemoryIncidentRepository::new(vec![incident("1234", "A")]);

        let updated = repo
            .update_by_id(&IncidentId::from("1234"), IncidentRecord::new())
            .await
            .unwrap();

        assert_eq!(updated, Some(incident("1234", "A")));
    }

    #[tokio::test]
    async fn should_overwrite_only_patched_keys_in_place() {
        let repo = InMemoryIncidentRepository::new(vec![incident("1234", "A")]);

        let patch = IncidentRecord::new()
            .with("severity", "Critical")
            .with("probability", "Likely");
        repo.update_by_id(&IncidentId::from("1234"), patch)
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let stored = &all[0];
        assert_eq!(stored.get("severity"), Some(&json!("Critical")));
        assert_eq!(stored.get("probability"), Some(&json!("Likely")));
        assert_eq!(stored.get("building"), Some(&json!("A")));
        assert_eq!(stored.id(), Some("1234"));
    }

    #[tokio::test]
    async fn should_update_only_first_duplicate() {
        let repo = InMemoryIncidentRepository::new(vec![
            incident("a", "First"),
            incident("a", "Second"),
        ]);

        repo.update_by_id(
            &IncidentId::from("a"),
            IncidentRecord::new().with("building", "Patched"),
        )
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].get("building"), Some(&json!("Patched")));
        assert_eq!(all[1], incident("a", "Second"));
    }

    #[tokio::test]
    async fn should_not_mutate_when_update_target_missing() {
        let seed = vec![incident("1234", "A"), unidentified("B")];
        let repo = InMemoryIncidentRepository::new(seed.clone());

        let updated = repo
            .update_by_id(&IncidentId::from("9999"), IncidentRecord::new().with("x", 1))
            .await
            .unwrap();

        assert!(updated.is_none());
        let after = serde_json::to_vec(&repo.get_all().await.unwrap()).unwrap();
        assert_eq!(after, serde_json::to_vec(&seed).unwrap());
    }

    #[tokio::test]
    async fn should_delete_all_and_only_matches() {
        let repo = InMemoryIncidentRepository::new(vec![
            incident("a", "1"),
            incident("b", "2"),
            unidentified("3"),
            incident("a", "4"),
        ]);

        let deletion = repo.delete_by_id(&IncidentId::from("a")).await.unwrap();

        assert_eq!(deletion.removed, 2);
        assert_eq!(
            deletion.remaining,
            vec![incident("b", "2"), unidentified("3")]
        );
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_treat_missing_delete_target_as_noop() {
        let seed = vec![unidentified("A"), unidentified("B")];
        let repo = InMemoryIncidentRepository::new(seed.clone());

        let deletion = repo.delete_by_id(&IncidentId::from("9999")).await.unwrap();

        assert_eq!(deletion.removed, 0);
        assert_eq!(deletion.remaining, seed);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_not_lose_concurrent_appends() {
        let repo = Arc::new(InMemoryIncidentRepository::default());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.append(incident(&n.to_string(), "Z")).await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_every_concurrent_patch_of_one_record() {
        let repo = Arc::new(InMemoryIncidentRepository::new(vec![incident("1234", "A")]));

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let patch = IncidentRecord::new().with(format!("k{n}"), n);
                    let updated = repo
                        .update_by_id(&IncidentId::from("1234"), patch)
                        .await
                        .unwrap();
                    assert!(updated.is_some());
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        for n in 0..64 {
            assert_eq!(all[0].get(&format!("k{n}")), Some(&json!(n)));
        }
        assert_eq!(all[0].get("building"), Some(&json!("A")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_delete_only_matches_while_appends_race() {
        let seed: Vec<_> = (0..32).map(|_| incident("gone", "X")).collect();
        let repo = Arc::new(InMemoryIncidentRepository::new(seed));

        let mut handles = Vec::new();
        for n in 0..32 {
            let append_repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                append_repo
                    .append(incident(&format!("keep{n}"), "Y"))
                    .await
                    .unwrap();
            }));
            let delete_repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                delete_repo
                    .delete_by_id(&IncidentId::from("gone"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 32);
        assert!(all.iter().all(|r| r.get("building") == Some(&json!("Y"))));
    }
}
