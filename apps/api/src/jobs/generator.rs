//! Mock job posting generation.
//!
//! Every field except `location` is drawn independently and uniformly from
//! canned values. Output is reproducible when the random source is seeded.

use rand::Rng;
use serde::Serialize;

/// Number of postings produced per search.
pub const POSTINGS_PER_SEARCH: usize = 9;

pub const COMPANIES: &[&str] = &[
    "TechCorp",
    "InnovateX",
    "Global Systems",
    "Future Net",
    "Cloud Nine",
    "StartUp Inc",
];

pub const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Remote", "Contract"];

/// Salary lower bound is drawn from `LOW..LOW + SPREAD`, upper from `HIGH..HIGH + SPREAD` (thousands).
const SALARY_LOW: u32 = 70;
const SALARY_HIGH: u32 = 120;
const SALARY_SPREAD: u32 = 50;

/// Injectable source of uniform random choices.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..high`.
    fn range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn range(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..high)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub salary: String,
}

/// The five title patterns for a domain, in a fixed order.
pub fn title_options(domain: &str) -> [String; 5] {
    [
        format!("Senior {domain}"),
        format!("Junior {domain}"),
        format!("{domain} Lead"),
        format!("{domain} Engineer"),
        format!("Head of {domain}"),
    ]
}

pub fn job_description(domain: &str) -> String {
    format!(
        "We are looking for a talented {domain} to join our team. \
         You will be responsible for developing high-quality solutions..."
    )
}

/// Formats `$Xk - $Yk`. The bounds are drawn independently and their order is
/// not checked; the ranges are disjoint, which currently keeps X below Y.
pub fn salary_range<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let low = rng.range(SALARY_LOW, SALARY_LOW + SALARY_SPREAD);
    let high = rng.range(SALARY_HIGH, SALARY_HIGH + SALARY_SPREAD);
    format!("${low}k - ${high}k")
}

/// Produces exactly [`POSTINGS_PER_SEARCH`] postings for `domain` in `location`.
pub fn generate_mock_jobs<R: RandomSource + ?Sized>(
    domain: &str,
    location: &str,
    rng: &mut R,
) -> Vec<JobPosting> {
    let titles = title_options(domain);
    let description = job_description(domain);

    (0..POSTINGS_PER_SEARCH)
        .map(|_| JobPosting {
            title: titles[rng.pick(titles.len())].clone(),
            company: COMPANIES[rng.pick(COMPANIES.len())].to_string(),
            location: location.to_string(),
            employment_type: EMPLOYMENT_TYPES[rng.pick(EMPLOYMENT_TYPES.len())].to_string(),
            description: description.clone(),
            salary: salary_range(&mut *rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn parse_salary(salary: &str) -> (u32, u32) {
        let (low, high) = salary.split_once(" - ").unwrap();
        let strip = |s: &str| {
            s.trim_start_matches('$')
                .trim_end_matches('k')
                .parse::<u32>()
                .unwrap()
        };
        (strip(low), strip(high))
    }

    #[test]
    fn test_generates_nine_postings_with_verbatim_location() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let jobs = generate_mock_jobs("Backend", "São Paulo, BR", &mut rng);
        assert_eq!(jobs.len(), 9);
        assert!(jobs.iter().all(|j| j.location == "São Paulo, BR"));
    }

    #[test]
    fn test_fields_come_from_fixed_sets() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let titles = title_options("DevOps");
            for job in generate_mock_jobs("DevOps", "Austin", &mut rng) {
                assert!(titles.contains(&job.title), "unexpected title {}", job.title);
                assert!(COMPANIES.contains(&job.company.as_str()));
                assert!(EMPLOYMENT_TYPES.contains(&job.employment_type.as_str()));
                assert_eq!(job.description, job_description("DevOps"));
            }
        }
    }

    #[test]
    fn test_salary_bounds() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (low, high) = parse_salary(&salary_range(&mut rng));
            assert!((70..120).contains(&low), "low bound {low} out of range");
            assert!((120..170).contains(&high), "high bound {high} out of range");
        }
    }

    #[test]
    fn test_same_seed_same_postings() {
        let a = generate_mock_jobs("QA", "Oslo", &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate_mock_jobs("QA", "Oslo", &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_patterns() {
        let titles = title_options("Security");
        assert_eq!(titles[0], "Senior Security");
        assert_eq!(titles[2], "Security Lead");
        assert_eq!(titles[4], "Head of Security");
    }

    #[test]
    fn test_posting_serializes_type_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let job = generate_mock_jobs("ML", "Tokyo", &mut rng).remove(0);
        let json = serde_json::to_value(&job).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("employment_type").is_none());
    }
}
