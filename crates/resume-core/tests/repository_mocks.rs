#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! In-memory `ResumeRepository` storing flattened snapshots.

use std::{collections::HashMap, sync::RwLock};

use chrono::NaiveDate;
use resume_core::{
    Career, ErrorCollector, RepositoryError, RepositoryResult, Resume, ResumeDraft, ResumeId,
    ResumeRepository, ResumeSnapshot, UserId, YearMonth,
};

// ============================================================================
// MOCK RESUME REPOSITORY
// ============================================================================

/// Stores snapshots as JSON, the way a backup file would hold them.
#[derive(Default)]
struct InMemoryResumeRepository {
    rows: RwLock<HashMap<ResumeId, String>>,
}

impl InMemoryResumeRepository {
    fn decode(id: ResumeId, json: &str) -> RepositoryResult<Resume> {
        ResumeSnapshot::from_json(json)
            .map(Resume::from_snapshot)
            .map_err(|e| RepositoryError::corrupt_snapshot(id, e))
    }
}

impl ResumeRepository for InMemoryResumeRepository {
    fn load(&self, id: &ResumeId) -> RepositoryResult<Resume> {
        let rows = self
            .rows
            .read()
            .map_err(RepositoryError::backend)?;
        rows.get(id)
            .ok_or(RepositoryError::ResumeNotFound(*id))
            .and_then(|json| Self::decode(*id, json))
    }

    fn save(&self, resume: &Resume) -> RepositoryResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(RepositoryError::backend)?;

        if let Some(stored) = rows.get(&resume.id()) {
            let stored = Self::decode(resume.id(), stored)?;
            if stored.updated_at() > resume.updated_at() {
                return Err(RepositoryError::stale(resume, &stored));
            }
        }

        let json = resume
            .to_snapshot()
            .to_json()
            .map_err(RepositoryError::backend)?;
        rows.insert(resume.id(), json);
        Ok(())
    }

    fn delete(&self, id: &ResumeId) -> RepositoryResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(RepositoryError::backend)?;
        rows.remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::ResumeNotFound(*id))
    }

    fn list_by_user(&self, user_id: &UserId) -> RepositoryResult<Vec<Resume>> {
        let rows = self
            .rows
            .read()
            .map_err(RepositoryError::backend)?;
        rows.iter()
            .map(|(id, json)| Self::decode(*id, json))
            .filter(|resume| resume.as_ref().map_or(true, |r| r.user_id() == *user_id))
            .collect()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

fn resume_for(user_id: UserId, name: &str) -> Resume {
    let mut errors = ErrorCollector::new();
    let career = Career::create(
        &mut errors,
        "ABC",
        YearMonth::parse("2020-01").expect("valid"),
        None,
        true,
    );
    Resume::create(
        &mut errors,
        ResumeDraft::new(
            user_id,
            name,
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            "Yamada",
            "Taro",
        )
        .with_career(career),
    )
    .expect("valid resume")
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_save_then_load_round_trips() {
    let repo = InMemoryResumeRepository::default();
    let resume = resume_for(UserId::generate(), "Main");

    repo.save(&resume).expect("saved");
    let loaded = repo.load(&resume.id()).expect("loaded");

    assert_eq!(loaded, resume);
}

#[test]
fn test_exists_uses_load() {
    let repo = InMemoryResumeRepository::default();
    let resume = resume_for(UserId::generate(), "Main");

    assert!(!repo.exists(&resume.id()).expect("lookup"));
    repo.save(&resume).expect("saved");
    assert!(repo.exists(&resume.id()).expect("lookup"));
}

#[test]
fn test_delete_missing_is_not_found() {
    let repo = InMemoryResumeRepository::default();
    let result = repo.delete(&ResumeId::generate());
    assert!(matches!(result, Err(RepositoryError::ResumeNotFound(_))));
}

#[test]
fn test_list_by_user_filters_owner() {
    let repo = InMemoryResumeRepository::default();
    let owner = UserId::generate();
    repo.save(&resume_for(owner, "First")).expect("saved");
    repo.save(&resume_for(owner, "Second")).expect("saved");
    repo.save(&resume_for(UserId::generate(), "Other"))
        .expect("saved");

    let mut names: Vec<String> = repo
        .list_by_user(&owner)
        .expect("listed")
        .iter()
        .map(|r| r.name().to_string())
        .collect();
    names.sort();

    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn test_unreadable_row_is_corrupt_snapshot() {
    let repo = InMemoryResumeRepository::default();
    let id = ResumeId::generate();
    repo.rows
        .write()
        .expect("lock")
        .insert(id, "{\"id\": 7}".to_string());

    let result = repo.load(&id);

    assert!(matches!(
        result,
        Err(RepositoryError::CorruptSnapshot { id: found, .. }) if found == id
    ));
    assert!(repo.exists(&id).is_err());
}

#[test]
fn test_stale_copy_is_rejected() {
    let repo = InMemoryResumeRepository::default();
    let original = resume_for(UserId::generate(), "Main");
    repo.save(&original).expect("saved");

    let newer = original.set_auto_save(true);
    repo.save(&newer).expect("newer copy saved");

    let result = repo.save(&original);
    assert_eq!(result, Err(RepositoryError::stale(&original, &newer)));
}

#[test]
fn test_deleted_resume_is_gone() {
    let repo = InMemoryResumeRepository::default();
    let resume = resume_for(UserId::generate(), "Main");
    repo.save(&resume).expect("saved");

    repo.delete(&resume.id()).expect("deleted");

    assert!(matches!(
        repo.load(&resume.id()),
        Err(RepositoryError::ResumeNotFound(_))
    ));
}
