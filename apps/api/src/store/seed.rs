//! Embedded seed listing — the store's only data source. Posting dates are
//! computed relative to startup so the recency windows stay meaningful.

use chrono::{Duration, Utc};

use crate::models::job::{CompanyLogo, Job, JobCategory, JobType, WorkModel};

fn posted(days_ago: i64) -> String {
    (Utc::now() - Duration::days(days_ago)).to_rfc3339()
}

fn logo(seed: &str, company: &str) -> CompanyLogo {
    CompanyLogo {
        id: format!("logo-{seed}"),
        image_url: format!("https://picsum.photos/seed/{seed}/200/200"),
        description: format!("{company} logo"),
    }
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior Backend Engineer".to_string(),
            company: "Safaricom PLC".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Design and scale the payment APIs behind M-PESA. \
                You will own services handling millions of daily transactions, \
                work with Kafka and PostgreSQL, and mentor a team of mid-level engineers. \
                5+ years of backend experience required."
                .to_string(),
            posted_date: posted(2),
            category: JobCategory::Backend,
            job_type: JobType::FullTime,
            work_model: WorkModel::Hybrid,
            apply_url: "https://careers.safaricom.co.ke/senior-backend-engineer".to_string(),
            company_logo: logo("safaricom", "Safaricom PLC"),
        },
        Job {
            id: "2".to_string(),
            title: "Frontend Developer (React)".to_string(),
            company: "Africa's Talking".to_string(),
            location: "Remote (Kenya)".to_string(),
            description: "Build the developer dashboard used by thousands of businesses \
                integrating SMS, USSD and voice APIs across Africa. Strong React and \
                TypeScript skills expected; experience with design systems is a plus."
                .to_string(),
            posted_date: posted(4),
            category: JobCategory::Frontend,
            job_type: JobType::FullTime,
            work_model: WorkModel::Remote,
            apply_url: "https://africastalking.com/careers/frontend-developer".to_string(),
            company_logo: logo("africastalking", "Africa's Talking"),
        },
        Job {
            id: "3".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "Cellulant".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Own the Kubernetes platform our payment rails run on. \
                You will build CI/CD pipelines, harden our AWS footprint, and drive \
                observability with Prometheus and Grafana across three markets."
                .to_string(),
            posted_date: posted(6),
            category: JobCategory::DevOps,
            job_type: JobType::FullTime,
            work_model: WorkModel::OnSite,
            apply_url: "https://cellulant.io/careers/devops-engineer".to_string(),
            company_logo: logo("cellulant", "Cellulant"),
        },
        Job {
            id: "4".to_string(),
            title: "Android Engineer".to_string(),
            company: "M-KOPA Solar".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Ship the Android app our field agents use to connect \
                off-grid households to pay-as-you-go solar power. Kotlin, offline-first \
                sync, and low-end device performance are the daily bread here."
                .to_string(),
            posted_date: posted(9),
            category: JobCategory::Mobile,
            job_type: JobType::FullTime,
            work_model: WorkModel::Hybrid,
            apply_url: "https://m-kopa.com/careers/android-engineer".to_string(),
            company_logo: logo("mkopa", "M-KOPA Solar"),
        },
        Job {
            id: "5".to_string(),
            title: "Data Scientist".to_string(),
            company: "Twiga Foods".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Forecast demand for fresh produce across 10,000+ vendors. \
                You will build and deploy models on real logistics data, working closely \
                with the routing team. Python, SQL and a pragmatic mindset required."
                .to_string(),
            posted_date: posted(12),
            category: JobCategory::DataScience,
            job_type: JobType::FullTime,
            work_model: WorkModel::OnSite,
            apply_url: "https://twiga.com/careers/data-scientist".to_string(),
            company_logo: logo("twiga", "Twiga Foods"),
        },
        Job {
            id: "6".to_string(),
            title: "Full Stack Engineer (Contract)".to_string(),
            company: "Lori Systems".to_string(),
            location: "Remote".to_string(),
            description: "Six-month contract building shipper-facing tooling for our \
                freight marketplace. Node.js and React on the surface, PostgreSQL \
                underneath. You will work directly with operations in Nairobi and Lagos."
                .to_string(),
            posted_date: posted(15),
            category: JobCategory::FullStack,
            job_type: JobType::Contract,
            work_model: WorkModel::Remote,
            apply_url: "https://lorisystems.com/careers/full-stack-contract".to_string(),
            company_logo: logo("lori", "Lori Systems"),
        },
        Job {
            id: "7".to_string(),
            title: "Data Engineer".to_string(),
            company: "Safaricom PLC".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Build the pipelines feeding analytics for Kenya's largest \
                telco. Airflow, Spark and a petabyte-scale lakehouse; you will partner \
                with the fraud and credit-scoring teams on near-real-time datasets."
                .to_string(),
            posted_date: posted(18),
            category: JobCategory::DataScience,
            job_type: JobType::FullTime,
            work_model: WorkModel::OnSite,
            apply_url: "https://careers.safaricom.co.ke/data-engineer".to_string(),
            company_logo: logo("safaricom", "Safaricom PLC"),
        },
        Job {
            id: "8".to_string(),
            title: "Backend Developer (Java)".to_string(),
            company: "Equity Bank".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Modernize core banking services as we move from monolith to \
                microservices. Java 17, Spring Boot, and a strong security culture. \
                Banking or fintech background preferred."
                .to_string(),
            posted_date: posted(21),
            category: JobCategory::Backend,
            job_type: JobType::FullTime,
            work_model: WorkModel::OnSite,
            apply_url: "https://equitybankgroup.com/careers/backend-developer".to_string(),
            company_logo: logo("equity", "Equity Bank"),
        },
        Job {
            id: "9".to_string(),
            title: "Frontend Engineer (Part-time)".to_string(),
            company: "Sendy".to_string(),
            location: "Remote (Kenya)".to_string(),
            description: "Part-time role maintaining the merchant dashboard for our \
                delivery platform. Vue 3 codebase with a gradual TypeScript migration \
                underway. Roughly 20 hours a week, flexible schedule."
                .to_string(),
            posted_date: posted(26),
            category: JobCategory::Frontend,
            job_type: JobType::PartTime,
            work_model: WorkModel::Remote,
            apply_url: "https://sendyit.com/careers/frontend-part-time".to_string(),
            company_logo: logo("sendy", "Sendy"),
        },
        Job {
            id: "10".to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "iHub".to_string(),
            location: "Nairobi, Kenya".to_string(),
            description: "Three-month internship rotating across community projects at \
                Nairobi's original tech hub. You will pair with mentors on real products \
                for local startups. Open to final-year students and recent graduates."
                .to_string(),
            posted_date: posted(34),
            category: JobCategory::FullStack,
            job_type: JobType::Internship,
            work_model: WorkModel::OnSite,
            apply_url: "https://ihub.co.ke/careers/engineering-intern".to_string(),
            company_logo: logo("ihub", "iHub"),
        },
        Job {
            id: "11".to_string(),
            title: "Flutter Developer".to_string(),
            company: "Pwani Digital".to_string(),
            location: "Mombasa, Kenya".to_string(),
            description: "Build mobile experiences for coastal tourism and logistics \
                clients. Flutter with a Firebase backend today, with a planned move to \
                a Dart server stack. Two years of mobile experience expected."
                .to_string(),
            posted_date: posted(41),
            category: JobCategory::Mobile,
            job_type: JobType::FullTime,
            work_model: WorkModel::OnSite,
            apply_url: "https://pwanidigital.co.ke/careers/flutter-developer".to_string(),
            company_logo: logo("pwani", "Pwani Digital"),
        },
        Job {
            id: "12".to_string(),
            title: "Junior Developer - Instant Start, Ksh 500,000 Weekly!!".to_string(),
            company: "Global Hiring Experts Ltd".to_string(),
            location: "Remote".to_string(),
            description: "Amazing opportunity earn big money working from home no \
                experience needed!! We hire everyone immediately. To secure your slot \
                simply pay the one-time registration fee and send your bank details \
                and ID copy to our recruitment agent on WhatsApp."
                .to_string(),
            posted_date: posted(1),
            category: JobCategory::FullStack,
            job_type: JobType::Contract,
            work_model: WorkModel::Remote,
            apply_url: "https://global-hiring-experts.example.com/apply-now".to_string(),
            company_logo: logo("ghe", "Global Hiring Experts Ltd"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let jobs = jobs();
        let mut ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_seed_dates_all_parse() {
        for job in jobs() {
            assert!(job.posted_at().is_some(), "unparseable date on job {}", job.id);
        }
    }

    #[test]
    fn test_seed_covers_known_companies() {
        let jobs = jobs();
        for company in ["Safaricom PLC", "Africa's Talking", "Equity Bank"] {
            assert!(
                jobs.iter().any(|j| j.company == company),
                "no seed posting for {company}"
            );
        }
    }
}
