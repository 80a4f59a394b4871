//! Job Store — the immutable, process-wide list of postings.
//! Loaded once at startup; shared behind an `Arc` with no locking, since
//! nothing mutates it afterwards.

pub mod seed;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::models::job::Job;

#[derive(Debug)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    /// Builds a store, enforcing the id-uniqueness invariant.
    pub fn new(jobs: Vec<Job>) -> Result<Self> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id.as_str()) {
                bail!("duplicate job id in store: {}", job.id);
            }
        }
        Ok(Self { jobs })
    }

    /// The embedded seed listing.
    pub fn seeded() -> Result<Self> {
        Self::new(seed::jobs())
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Case-insensitive exact match on company name. Same computation the
    /// scanner exposes to the LLM as its `find_jobs` capability.
    pub fn find_by_companies(&self, companies: &[String]) -> Vec<&Job> {
        let wanted: Vec<String> = companies.iter().map(|c| c.to_lowercase()).collect();
        self.jobs
            .iter()
            .filter(|job| wanted.iter().any(|w| *w == job.company.to_lowercase()))
            .collect()
    }
}
