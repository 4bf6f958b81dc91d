//! In-memory job board.
//!
//! The board receives validated listings from the job form. It is the only
//! place listings are stored and nothing is written to disk.

use super::error::StateError;
use super::form::{ResetForm, SubmitHandler};
use super::job::JobRecord;
use log::*;
use std::{fs, path::Path};
use uuid::Uuid;

/// Ordered collection of posted job listings.
///
#[derive(Debug, Default, Clone)]
pub struct JobBoard {
    jobs: Vec<JobRecord>,
}

impl JobBoard {
    /// Return a new board holding the given listings.
    ///
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        JobBoard { jobs }
    }

    /// Load listings from a JSON array file.
    ///
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let contents = fs::read_to_string(path).map_err(|e| StateError::JobsFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut jobs: Vec<JobRecord> = serde_json::from_str(&contents)
            .map_err(|e| StateError::JobsFileParse(e.to_string()))?;
        // Listings must be addressable for editing
        for job in jobs.iter_mut().filter(|job| job.id.is_none()) {
            job.id = Some(Uuid::new_v4().to_string());
        }
        info!("Loaded {} job(s) from {}.", jobs.len(), path.display());
        Ok(JobBoard::new(jobs))
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JobRecord> {
        self.jobs.get(index)
    }

    /// Return the listing with the given identifier.
    ///
    #[allow(dead_code)]
    pub fn find(&self, id: &str) -> Result<&JobRecord, StateError> {
        self.jobs
            .iter()
            .find(|job| job.id.as_deref() == Some(id))
            .ok_or_else(|| StateError::JobNotFound { id: id.to_string() })
    }

    /// Store a listing and return its identifier. Listings without an
    /// identifier get a new one and are appended; listings with one replace
    /// the stored listing of the same identifier.
    ///
    pub fn upsert(&mut self, mut record: JobRecord) -> String {
        let id = match &record.id {
            Some(id) => id.clone(),
            None => {
                let id = Uuid::new_v4().to_string();
                record.id = Some(id.clone());
                id
            }
        };
        match self
            .jobs
            .iter_mut()
            .find(|job| job.id.as_deref() == Some(id.as_str()))
        {
            Some(existing) => {
                info!("Updated job '{}' ({}).", record.title, id);
                *existing = record;
            }
            None => {
                info!("Posted job '{}' ({}).", record.title, id);
                self.jobs.push(record);
            }
        }
        id
    }
}

impl SubmitHandler for JobBoard {
    fn submit(&mut self, record: JobRecord, reset: ResetForm<'_>) {
        self.upsert(record);
        reset.reset();
    }
}
