//! Query/Filter Pipeline — recency cutoff, free-text search, facet filters,
//! newest-first ordering over the job listing.
//!
//! Stage order is fixed: later stages only see records that survived earlier
//! ones. The pipeline never mutates its input and never fails; malformed
//! posting dates degrade (excluded from recency windows, sorted last).

pub mod handlers;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};

use crate::models::job::{Job, JobCategory, JobType, WorkModel};

/// Recency window applied before any other stage, evaluated against "now"
/// at call time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Week,
    Month,
}

impl std::str::FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(format!("unknown date filter: {other} (expected all, week or month)")),
        }
    }
}

/// Listing criteria. An empty facet set means "no restriction on this facet",
/// never "match nothing".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search_query: String,
    pub date_filter: DateFilter,
    pub categories: HashSet<JobCategory>,
    pub job_types: HashSet<JobType>,
    pub work_models: HashSet<WorkModel>,
    pub locations: HashSet<String>,
}

/// Applies the pipeline stages in order and returns a new, sorted list.
/// An empty result is a valid, non-error outcome.
pub fn filter_jobs(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    filter_jobs_at(jobs, criteria, Utc::now())
}

/// Same as [`filter_jobs`] with an explicit evaluation instant, so recency
/// windows stay deterministic under test.
pub fn filter_jobs_at(jobs: &[Job], criteria: &FilterCriteria, now: DateTime<Utc>) -> Vec<Job> {
    let cutoff = match criteria.date_filter {
        DateFilter::All => None,
        DateFilter::Week => Some(now - Duration::days(7)),
        DateFilter::Month => Some(now - Duration::days(30)),
    };

    let query = criteria.search_query.to_lowercase();

    let mut survivors: Vec<(Job, Option<DateTime<Utc>>)> = jobs
        .iter()
        .map(|job| (job.clone(), job.posted_at()))
        // Stage 1: recency. A malformed date is not-after any cutoff.
        .filter(|(_, posted)| match cutoff {
            None => true,
            Some(cutoff) => posted.map(|p| p >= cutoff).unwrap_or(false),
        })
        // Stage 2: free text over title OR company OR description.
        .filter(|(job, _)| {
            query.is_empty()
                || job.title.to_lowercase().contains(&query)
                || job.company.to_lowercase().contains(&query)
                || job.description.to_lowercase().contains(&query)
        })
        // Stage 3: AND across facets, OR within each facet.
        .filter(|(job, _)| {
            facet_passes(&criteria.categories, &job.category)
                && facet_passes(&criteria.job_types, &job.job_type)
                && facet_passes(&criteria.work_models, &job.work_model)
                && (criteria.locations.is_empty() || criteria.locations.contains(&job.location))
        })
        .collect();

    // Stage 4: newest first. `sort_by` is stable, so equal timestamps keep
    // their input order; unparseable dates go last.
    survivors.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    survivors.into_iter().map(|(job, _)| job).collect()
}

fn facet_passes<T: Eq + Hash>(selected: &HashSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}
