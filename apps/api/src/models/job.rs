use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Job category facet. Serialized labels are the public API labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
    Mobile,
    DevOps,
    #[serde(rename = "Data Science")]
    DataScience,
}

impl FromStr for JobCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(Self::Frontend),
            "Backend" => Ok(Self::Backend),
            "Full Stack" => Ok(Self::FullStack),
            "Mobile" => Ok(Self::Mobile),
            "DevOps" => Ok(Self::DevOps),
            "Data Science" => Ok(Self::DataScience),
            other => Err(format!("unknown job category: {other}")),
        }
    }
}

/// Employment type facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Contract,
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(Self::FullTime),
            "Part-time" => Ok(Self::PartTime),
            "Internship" => Ok(Self::Internship),
            "Contract" => Ok(Self::Contract),
            other => Err(format!("unknown job type: {other}")),
        }
    }
}

/// Work model facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkModel {
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
    Hybrid,
}

impl FromStr for WorkModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Remote" => Ok(Self::Remote),
            "On-site" => Ok(Self::OnSite),
            "Hybrid" => Ok(Self::Hybrid),
            other => Err(format!("unknown work model: {other}")),
        }
    }
}

/// Static logo asset reference. Never mutated by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLogo {
    pub id: String,
    pub image_url: String,
    pub description: String,
}

/// One job posting. Immutable once loaded into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// ISO 8601. Kept as the raw string; see [`Job::posted_at`] for the
    /// tolerant parse the pipeline relies on.
    pub posted_date: String,
    pub category: JobCategory,
    pub job_type: JobType,
    pub work_model: WorkModel,
    pub apply_url: String,
    pub company_logo: CompanyLogo,
}

impl Job {
    /// Parses `posted_date`. `None` for malformed values — the pipeline
    /// treats those as not-after any cutoff and sorts them last.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.posted_date) {
            return Some(dt.with_timezone(&Utc));
        }
        // Date-only values are taken as midnight UTC.
        NaiveDate::parse_from_str(&self.posted_date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|ndt| Utc.from_utc_datetime(&ndt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(posted_date: &str) -> Job {
        Job {
            id: "1".to_string(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Build APIs.".to_string(),
            posted_date: posted_date.to_string(),
            category: JobCategory::Backend,
            job_type: JobType::FullTime,
            work_model: WorkModel::Remote,
            apply_url: "https://example.com/apply".to_string(),
            company_logo: CompanyLogo {
                id: "logo-acme".to_string(),
                image_url: "https://picsum.photos/seed/acme/200/200".to_string(),
                description: "Acme logo".to_string(),
            },
        }
    }

    #[test]
    fn test_posted_at_parses_rfc3339() {
        let job = make_job("2024-07-18T09:30:00Z");
        let parsed = job.posted_at().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 7, 18, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_posted_at_parses_date_only_as_midnight_utc() {
        let job = make_job("2024-07-18");
        let parsed = job.posted_at().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 7, 18, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_posted_at_malformed_is_none() {
        assert!(make_job("last Tuesday").posted_at().is_none());
        assert!(make_job("").posted_at().is_none());
    }

    #[test]
    fn test_job_serializes_camel_case_api_labels() {
        let json = serde_json::to_value(make_job("2024-07-18T09:30:00Z")).unwrap();
        assert_eq!(json["postedDate"], "2024-07-18T09:30:00Z");
        assert_eq!(json["applyUrl"], "https://example.com/apply");
        assert_eq!(json["jobType"], "Full-time");
        assert_eq!(json["companyLogo"]["imageUrl"], "https://picsum.photos/seed/acme/200/200");
    }

    #[test]
    fn test_category_labels_round_trip() {
        for label in ["Frontend", "Backend", "Full Stack", "Mobile", "DevOps", "Data Science"] {
            let category = JobCategory::from_str(label).unwrap();
            assert_eq!(serde_json::to_value(category).unwrap(), label);
        }
        assert!(JobCategory::from_str("Gardening").is_err());
    }

    #[test]
    fn test_job_type_labels_round_trip() {
        for label in ["Full-time", "Part-time", "Internship", "Contract"] {
            let job_type = JobType::from_str(label).unwrap();
            assert_eq!(serde_json::to_value(job_type).unwrap(), label);
        }
        assert!(JobType::from_str("full-time").is_err());
    }

    #[test]
    fn test_work_model_labels_round_trip() {
        for label in ["Remote", "On-site", "Hybrid"] {
            let model = WorkModel::from_str(label).unwrap();
            assert_eq!(serde_json::to_value(model).unwrap(), label);
        }
        assert!(WorkModel::from_str("Onsite").is_err());
    }
}
