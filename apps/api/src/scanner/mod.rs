//! Company Scanner — finds postings from named companies. The LLM drives
//! the primary path through a `find_jobs` tool backed by the Job Store; the
//! direct match below is both the fallback and the reference semantics the
//! tool itself computes.

pub mod handlers;
pub mod prompts;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, ContentParam, LlmClient, Message, ToolDefinition};
use crate::scanner::prompts::{SCAN_PROMPT_TEMPLATE, SCAN_SYSTEM};
use crate::store::JobStore;

/// Well-known Kenyan tech employers scanned by default.
pub const KNOWN_COMPANIES: [&str; 9] = [
    "Safaricom PLC",
    "Africa's Talking",
    "Cellulant",
    "M-KOPA Solar",
    "Twiga Foods",
    "Lori Systems",
    "Equity Bank",
    "Sendy",
    "iHub",
];

/// One matched posting, projected for the scan panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundJob {
    pub company: String,
    pub title: String,
    pub job_id: String,
}

/// Scan output. Companies with no matches are simply absent. Transient:
/// built per call and discarded once the caller consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub found_jobs: Vec<FoundJob>,
}

const FIND_JOBS_TOOL: &str = "find_jobs";

fn find_jobs_tool() -> ToolDefinition {
    ToolDefinition {
        name: FIND_JOBS_TOOL,
        description: "Finds jobs from a given list of companies within the job board's database.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "companies": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Company names to search for."
                }
            },
            "required": ["companies"]
        }),
    }
}

#[derive(Debug, Deserialize)]
struct FindJobsInput {
    companies: Vec<String>,
}

/// The `find_jobs` capability handed to the LLM: case-insensitive exact
/// company match over the store, projected to `{id, title, company}` rows.
fn run_find_jobs(store: &JobStore, companies: &[String]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = store
        .find_by_companies(companies)
        .into_iter()
        .map(|job| json!({"id": job.id, "title": job.title, "company": job.company}))
        .collect();
    serde_json::Value::Array(rows)
}

/// Deterministic reference path: exactly what the capability computes,
/// projected straight into the result shape.
pub fn scan_fallback(store: &JobStore, companies: &[String]) -> ScanResult {
    ScanResult {
        found_jobs: store
            .find_by_companies(companies)
            .into_iter()
            .map(|job| FoundJob {
                company: job.company.clone(),
                title: job.title.clone(),
                job_id: job.id.clone(),
            })
            .collect(),
    }
}

/// Runs the scan. Tries the tool-call round-trip first; any failure — the
/// model skipping the tool, a transport error, a malformed projection —
/// lands on the deterministic fallback. Never fails.
pub async fn scan_by_company(
    llm: &LlmClient,
    store: &JobStore,
    companies: &[String],
) -> ScanResult {
    match scan_with_llm(llm, store, companies).await {
        Ok(result) => result,
        Err(e) => {
            warn!("company scan fell back to direct matching: {e}");
            scan_fallback(store, companies)
        }
    }
}

async fn scan_with_llm(
    llm: &LlmClient,
    store: &JobStore,
    companies: &[String],
) -> Result<ScanResult> {
    let prompt =
        SCAN_PROMPT_TEMPLATE.replace("{companies_json}", &serde_json::to_string(companies)?);
    let tools = [find_jobs_tool()];

    let mut messages = vec![Message::user(prompt)];
    let first = llm.call(&messages, SCAN_SYSTEM, Some(&tools)).await?;

    let tool_use = first
        .tool_use()
        .filter(|block| block.name.as_deref() == Some(FIND_JOBS_TOOL))
        .cloned()
        .ok_or_else(|| anyhow!("model did not invoke {FIND_JOBS_TOOL}"))?;

    let tool_use_id = tool_use
        .id
        .clone()
        .ok_or_else(|| anyhow!("tool_use block without an id"))?;
    let tool_input = tool_use.input.clone().unwrap_or_default();
    let input: FindJobsInput = serde_json::from_value(tool_input.clone())?;

    let rows = run_find_jobs(store, &input.companies);

    messages.push(Message {
        role: "assistant",
        content: vec![ContentParam::ToolUse {
            id: tool_use_id.clone(),
            name: FIND_JOBS_TOOL.to_string(),
            input: tool_input,
        }],
    });
    messages.push(Message {
        role: "user",
        content: vec![ContentParam::ToolResult {
            tool_use_id,
            content: rows.to_string(),
        }],
    });

    let second = llm.call(&messages, JSON_ONLY_SYSTEM, Some(&tools)).await?;
    let text = second.text().ok_or_else(|| anyhow!("empty scan projection"))?;
    let projected: ScanResult = serde_json::from_str(strip_json_fences(text))?;

    Ok(bind_to_store(projected, store))
}

/// Binds the model's projection back to the store: any row whose job id
/// does not resolve is dropped, keeping the result a subset of what the
/// capability itself would return.
fn bind_to_store(result: ScanResult, store: &JobStore) -> ScanResult {
    ScanResult {
        found_jobs: result
            .found_jobs
            .into_iter()
            .filter(|found| store.get(&found.job_id).is_some())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{CompanyLogo, Job, JobCategory, JobType, WorkModel};
    use std::collections::HashSet;

    fn make_job(id: &str, company: &str, title: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Build things.".to_string(),
            posted_date: "2024-07-18T09:00:00Z".to_string(),
            category: JobCategory::Backend,
            job_type: JobType::FullTime,
            work_model: WorkModel::Remote,
            apply_url: "https://example.com/apply".to_string(),
            company_logo: CompanyLogo {
                id: format!("logo-{id}"),
                image_url: "https://picsum.photos/seed/x/200/200".to_string(),
                description: format!("{company} logo"),
            },
        }
    }

    fn make_store() -> JobStore {
        JobStore::new(vec![
            make_job("1", "Safaricom PLC", "Backend Engineer"),
            make_job("2", "Safaricom PLC", "Data Engineer"),
            make_job("3", "Sendy", "Frontend Engineer"),
            make_job("4", "Twiga Foods", "Data Scientist"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fallback_matches_the_capability() {
        // Round trip: the fallback projection and the tool's own rows must
        // describe the same job set.
        let store = make_store();
        let names = vec!["safaricom plc".to_string(), "sendy".to_string()];

        let fallback: HashSet<String> = scan_fallback(&store, &names)
            .found_jobs
            .into_iter()
            .map(|f| f.job_id)
            .collect();

        let capability: HashSet<String> = run_find_jobs(&store, &names)
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(fallback, capability);
        assert_eq!(fallback.len(), 3);
    }

    #[test]
    fn test_fallback_is_case_insensitive_equality_not_substring() {
        let store = make_store();

        let result = scan_fallback(&store, &["SAFARICOM PLC".to_string()]);
        assert_eq!(result.found_jobs.len(), 2);

        // Substring of a stored name must not match.
        let result = scan_fallback(&store, &["Safaricom".to_string()]);
        assert!(result.found_jobs.is_empty());
    }

    #[test]
    fn test_fallback_omits_companies_without_matches() {
        let store = make_store();
        let result = scan_fallback(
            &store,
            &["Sendy".to_string(), "Nonexistent Co".to_string()],
        );
        let companies: HashSet<&str> =
            result.found_jobs.iter().map(|f| f.company.as_str()).collect();
        assert_eq!(companies, HashSet::from(["Sendy"]));
    }

    #[test]
    fn test_bind_to_store_drops_invented_rows() {
        let store = make_store();
        let projected = ScanResult {
            found_jobs: vec![
                FoundJob {
                    company: "Sendy".to_string(),
                    title: "Frontend Engineer".to_string(),
                    job_id: "3".to_string(),
                },
                FoundJob {
                    company: "Sendy".to_string(),
                    title: "Imaginary Role".to_string(),
                    job_id: "999".to_string(),
                },
            ],
        };
        let bound = bind_to_store(projected, &store);
        assert_eq!(bound.found_jobs.len(), 1);
        assert_eq!(bound.found_jobs[0].job_id, "3");
    }

    #[test]
    fn test_scan_result_serializes_service_shape() {
        let result = ScanResult {
            found_jobs: vec![FoundJob {
                company: "Sendy".to_string(),
                title: "Frontend Engineer".to_string(),
                job_id: "3".to_string(),
            }],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["foundJobs"][0]["jobId"], "3");
        assert_eq!(value["foundJobs"][0]["company"], "Sendy");
    }

    #[test]
    fn test_known_companies_list() {
        assert_eq!(KNOWN_COMPANIES.len(), 9);
        assert!(KNOWN_COMPANIES.contains(&"Safaricom PLC"));
    }
}
