//! Axum route handlers for the job listing and detail lookups.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::Job;
use crate::pipeline::{filter_jobs, DateFilter, FilterCriteria};
use crate::screening::screen_jobs;
use crate::state::AppState;

/// Query string for GET /api/v1/jobs. Facet params are comma-separated
/// enum labels, e.g. `categories=Backend,Data%20Science`.
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub models: Option<String>,
    #[serde(default)]
    pub locations: Option<String>,
    /// When true, the listing is bulk-screened and explicitly flagged
    /// postings are dropped before the response is built.
    #[serde(default)]
    pub screened: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

fn parse_facet<T>(raw: &Option<String>) -> Result<HashSet<T>, AppError>
where
    T: FromStr<Err = String> + Eq + Hash,
{
    let Some(raw) = raw else {
        return Ok(HashSet::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| T::from_str(part).map_err(AppError::Validation))
        .collect()
}

impl ListJobsParams {
    fn criteria(&self) -> Result<FilterCriteria, AppError> {
        let date_filter = match self.date.as_deref() {
            None => DateFilter::default(),
            Some(raw) => DateFilter::from_str(raw).map_err(AppError::Validation)?,
        };
        let locations: HashSet<String> = self
            .locations
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(FilterCriteria {
            search_query: self.q.clone().unwrap_or_default(),
            date_filter,
            categories: parse_facet(&self.categories)?,
            job_types: parse_facet(&self.types)?,
            work_models: parse_facet(&self.models)?,
            locations,
        })
    }
}

/// GET /api/v1/jobs
///
/// Runs the filter pipeline over the store and returns the listing the UI
/// renders. Optionally bulk-screens the survivors.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<ListJobsResponse>, AppError> {
    let criteria = params.criteria()?;
    let mut jobs = filter_jobs(state.store.all(), &criteria);

    if params.screened.unwrap_or(false) {
        jobs = screen_jobs(Arc::clone(&state.verdicts), jobs).await;
    }

    let count = jobs.len();
    Ok(Json(ListJobsResponse { jobs, count }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobCategory, JobType};

    #[test]
    fn test_empty_params_mean_unrestricted_criteria() {
        let criteria = ListJobsParams::default().criteria().unwrap();
        assert_eq!(criteria.date_filter, DateFilter::All);
        assert!(criteria.search_query.is_empty());
        assert!(criteria.categories.is_empty());
        assert!(criteria.job_types.is_empty());
        assert!(criteria.work_models.is_empty());
        assert!(criteria.locations.is_empty());
    }

    #[test]
    fn test_comma_separated_facets_parse() {
        let params = ListJobsParams {
            categories: Some("Backend, Data Science".to_string()),
            types: Some("Contract".to_string()),
            date: Some("week".to_string()),
            ..Default::default()
        };
        let criteria = params.criteria().unwrap();
        assert_eq!(criteria.date_filter, DateFilter::Week);
        assert_eq!(
            criteria.categories,
            [JobCategory::Backend, JobCategory::DataScience]
                .into_iter()
                .collect()
        );
        assert_eq!(criteria.job_types, [JobType::Contract].into_iter().collect());
    }

    #[test]
    fn test_unknown_facet_label_is_a_validation_error() {
        let params = ListJobsParams {
            categories: Some("Backend,Gardening".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.criteria(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_date_filter_is_a_validation_error() {
        let params = ListJobsParams {
            date: Some("fortnight".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.criteria(), Err(AppError::Validation(_))));
    }
}
