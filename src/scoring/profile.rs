//! Profile-mode recommendation scoring.
//!
//! Scores a job against a candidate profile instead of a query: skill
//! overlap, experience closeness, preferred locations and categories, and
//! salary-range overlap. The experience and salary signals work from values
//! inferred out of the posting's own text, so postings never need dedicated
//! structured fields for either.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::{JobListing, SalaryRange, UserProfile};
use crate::lexicon;
use crate::scoring::MAX_MATCH_REASONS;

/// Weight of the skill-overlap signal.
const SKILLS_WEIGHT: f64 = 0.35;
/// Weight of the experience-closeness signal.
const EXPERIENCE_WEIGHT: f64 = 0.25;
/// Weight of the preferred-location signal.
const LOCATION_WEIGHT: f64 = 0.15;
/// Flat bonus when the job's category is one of the preferred categories.
const CATEGORY_BONUS: f64 = 0.15;
/// Weight of the salary-overlap signal.
const SALARY_WEIGHT: f64 = 0.10;
/// Award for a profile skill found verbatim in the posting text.
const SKILL_EXACT_AWARD: f64 = 1.0;
/// Award when only a synonym of the skill is found.
const SKILL_SYNONYM_AWARD: f64 = 0.8;
/// Salary signal when either side of the comparison is unknown.
const SALARY_NEUTRAL: f64 = 0.5;
/// Inferred requirement when a posting names no experience level at all.
const DEFAULT_REQUIRED_YEARS: u32 = 2;

/// Score a job must exceed to be recommended.
pub const RECOMMENDATION_SCORE_THRESHOLD: f64 = 0.3;

static YEARS_EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+?\s*years?(?:\s+of)?\s+experience").unwrap());

static MINIMUM_YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"minimum(?:\s+of)?\s+(\d+)\s*years?").unwrap());

static SALARY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$?\s*(\d{1,3}(?:,\d{3})+|\d+)\s*([kK])?\s*(?:-|to)\s*\$?\s*(\d{1,3}(?:,\d{3})+|\d+)\s*([kK])?",
    )
    .unwrap()
});

/// Profile-mode score of one job, in [0, 1].
pub fn score_job(job: &JobListing, profile: &UserProfile) -> f64 {
    let text = job.combined_text().to_lowercase();

    let mut score = SKILLS_WEIGHT * skills_signal(&text, profile);
    score += EXPERIENCE_WEIGHT * experience_signal(job, profile);
    score += LOCATION_WEIGHT * location_signal(job, profile);
    if category_matches(job, profile) {
        score += CATEGORY_BONUS;
    }
    score += SALARY_WEIGHT * salary_signal(job, profile);

    score.clamp(0.0, 1.0)
}

/// Up to three explanations for a recommendation, in fixed priority order:
/// skills, location, category.
pub fn match_reasons(job: &JobListing, profile: &UserProfile) -> Vec<String> {
    let text = job.combined_text().to_lowercase();
    let mut reasons = Vec::new();

    for skill in &profile.skills {
        if reasons.len() >= MAX_MATCH_REASONS {
            break;
        }
        if text.contains(skill.to_lowercase().as_str()) {
            reasons.push(format!("Matches your {skill} skills"));
        }
    }

    if reasons.len() < MAX_MATCH_REASONS
        && !job.location.is_empty()
        && profile
            .preferred_locations
            .iter()
            .any(|preferred| lexicon::locations().matches_in(preferred, &job.location))
    {
        reasons.push("In your preferred location".to_string());
    }

    if reasons.len() < MAX_MATCH_REASONS && category_matches(job, profile) {
        reasons.push(format!("{} category", job.category));
    }

    reasons
}

/// Fraction of profile skills found in the posting text, with a reduced
/// award for synonym-only matches. An empty skill list scores zero.
fn skills_signal(text: &str, profile: &UserProfile) -> f64 {
    if profile.skills.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for skill in &profile.skills {
        let skill = skill.to_lowercase();
        if text.contains(skill.as_str()) {
            total += SKILL_EXACT_AWARD;
        } else if lexicon::skills()
            .expand(&skill)
            .iter()
            .any(|synonym| text.contains(synonym.as_str()))
        {
            total += SKILL_SYNONYM_AWARD;
        }
    }

    (total / profile.skills.len() as f64).min(1.0)
}

/// Closeness of the candidate's experience to the job's inferred requirement.
fn experience_signal(job: &JobListing, profile: &UserProfile) -> f64 {
    let required = extract_experience(&job.title, &job.description);
    match required.abs_diff(profile.experience) {
        0 => 1.0,
        1 => 0.9,
        2 => 0.7,
        3 => 0.5,
        _ => 0.2,
    }
}

fn location_signal(job: &JobListing, profile: &UserProfile) -> f64 {
    if job.location.is_empty() {
        return 0.0;
    }
    let matched = profile
        .preferred_locations
        .iter()
        .any(|preferred| lexicon::locations().matches_in(preferred, &job.location));
    if matched { 1.0 } else { 0.0 }
}

fn category_matches(job: &JobListing, profile: &UserProfile) -> bool {
    !job.category.is_empty()
        && profile
            .preferred_categories
            .iter()
            .any(|category| category == &job.category)
}

/// Overlap of the job's advertised range with the candidate's expectations.
///
/// Full overlap scores 1.0; disjoint ranges decay linearly with the gap,
/// measured in widths of the expected range. Either side missing is neutral.
fn salary_signal(job: &JobListing, profile: &UserProfile) -> f64 {
    let (Some(expected), Some(advertised)) = (
        profile.salary_expectations,
        extract_salary(&job.salary, &job.description),
    ) else {
        return SALARY_NEUTRAL;
    };

    if advertised.overlaps(&expected) {
        return 1.0;
    }

    let width = expected.width();
    if width <= 0.0 {
        return 0.0;
    }
    (1.0 - advertised.gap_to(&expected) / width).max(0.0)
}

/// Infer the years of experience a posting asks for.
///
/// Numeric patterns ("5+ years experience", "minimum of 3 years") win over
/// seniority words, which fall back to coarse defaults.
pub fn extract_experience(title: &str, description: &str) -> u32 {
    let text = format!("{title} {description}").to_lowercase();

    for re in [&*YEARS_EXPERIENCE_RE, &*MINIMUM_YEARS_RE] {
        if let Some(caps) = re.captures(&text)
            && let Ok(years) = caps[1].parse::<u32>()
        {
            return years;
        }
    }

    if text.contains("senior") || text.contains("lead") {
        5
    } else if text.contains("mid") || text.contains("intermediate") {
        3
    } else if text.contains("junior") || text.contains("entry") {
        1
    } else {
        DEFAULT_REQUIRED_YEARS
    }
}

/// Extract an annual salary range from the salary field, falling back to the
/// description.
///
/// Recognizes "$80,000 - $100,000", "$80k-$100k", and "80 to 100k" style
/// ranges. A range must carry a `$` or a `k` on at least one side; a bare
/// number range like "3-5 years" is not a salary. A bare side rides on the
/// other side's `k` suffix when it is too small to be an annual amount.
/// Returns `None` when nothing parses; callers treat that as neutral, not
/// as an error.
pub fn extract_salary(salary: &str, description: &str) -> Option<SalaryRange> {
    parse_salary_range(salary).or_else(|| parse_salary_range(description))
}

fn parse_salary_range(text: &str) -> Option<SalaryRange> {
    for caps in SALARY_RANGE_RE.captures_iter(text) {
        let any_k = caps.get(2).is_some() || caps.get(4).is_some();
        // A number range with neither a `$` nor a `k` is not pay ("3-5
        // years", "shifts of 8 to 12 hours").
        if !any_k && !caps[0].contains('$') {
            continue;
        }

        let min = parse_amount(&caps[1], caps.get(2).is_some(), any_k)?;
        let max = parse_amount(&caps[3], caps.get(4).is_some(), any_k)?;
        if min > max {
            return None;
        }
        return Some(SalaryRange::new(min, max));
    }
    None
}

fn parse_amount(raw: &str, own_k: bool, any_k: bool) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if own_k || (any_k && value < 1000.0) {
        Some(value * 1000.0)
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nursing_job() -> JobListing {
        JobListing::new(
            "job-1",
            "ICU Registered Nurse",
            "Seeking an ICU nurse with 5 years experience. Salary $85,000 - $105,000.",
        )
        .set_tags("rn, icu, critical care")
        .set_location("San Francisco, CA")
        .set_category("nursing")
    }

    #[test]
    fn test_extract_experience_numeric_patterns() {
        assert_eq!(extract_experience("Nurse", "Requires 5+ years experience"), 5);
        assert_eq!(extract_experience("Nurse", "3 years of experience needed"), 3);
        assert_eq!(extract_experience("Nurse", "minimum of 7 years in the ICU"), 7);
        assert_eq!(extract_experience("Nurse", "minimum 2 years"), 2);
    }

    #[test]
    fn test_extract_experience_seniority_words() {
        assert_eq!(extract_experience("Senior Engineer", "Great team"), 5);
        assert_eq!(extract_experience("Lead Therapist", ""), 5);
        assert_eq!(extract_experience("Mid-Level Developer", ""), 3);
        assert_eq!(extract_experience("Mid Developer", "Ship features"), 3);
        assert_eq!(extract_experience("Midwest Travel RN", ""), 3);
        assert_eq!(extract_experience("Junior Analyst", ""), 1);
        assert_eq!(extract_experience("Entry Level Technician", ""), 1);
    }

    #[test]
    fn test_extract_experience_numeric_beats_seniority() {
        assert_eq!(
            extract_experience("Senior Nurse", "Requires 3 years experience"),
            3
        );
    }

    #[test]
    fn test_extract_experience_default() {
        assert_eq!(
            extract_experience("Nurse", "A great opportunity"),
            DEFAULT_REQUIRED_YEARS
        );
    }

    #[test]
    fn test_extract_salary_formats() {
        let range = extract_salary("$80,000 - $100,000", "").unwrap();
        assert_eq!(range, SalaryRange::new(80_000.0, 100_000.0));

        let range = extract_salary("$80k-$100k", "").unwrap();
        assert_eq!(range, SalaryRange::new(80_000.0, 100_000.0));

        let range = extract_salary("80 to 100k", "").unwrap();
        assert_eq!(range, SalaryRange::new(80_000.0, 100_000.0));
    }

    #[test]
    fn test_extract_salary_falls_back_to_description() {
        let range = extract_salary("competitive", "Pays $90k - $110k depending on shift").unwrap();
        assert_eq!(range, SalaryRange::new(90_000.0, 110_000.0));
    }

    #[test]
    fn test_extract_salary_unparseable() {
        assert!(extract_salary("competitive", "Great benefits").is_none());
        assert!(extract_salary("", "").is_none());
    }

    #[test]
    fn test_extract_salary_skips_bare_number_ranges() {
        // An experience span is not a salary.
        assert!(
            extract_salary("competitive", "Requires 3-5 years experience in the ICU").is_none()
        );
        assert!(extract_salary("", "Shifts run 8 to 12 hours").is_none());

        // A marker-bearing range after a bare one still parses.
        let range = extract_salary(
            "",
            "Requires 3-5 years experience. Salary $85,000 - $105,000.",
        )
        .unwrap();
        assert_eq!(range, SalaryRange::new(85_000.0, 105_000.0));
    }

    #[test]
    fn test_skills_signal_awards() {
        let text = "icu registered nurse seeking an icu nurse";

        let exact = UserProfile::new().set_skills(["nurse"]);
        assert_eq!(skills_signal(text, &exact), 1.0);

        // "lpn" is absent but its class member "nurse" is present.
        let synonym = UserProfile::new().set_skills(["lpn"]);
        assert_eq!(skills_signal(text, &synonym), 0.8);

        let missing = UserProfile::new().set_skills(["fortran"]);
        assert_eq!(skills_signal(text, &missing), 0.0);

        let empty = UserProfile::new();
        assert_eq!(skills_signal(text, &empty), 0.0);
    }

    #[test]
    fn test_experience_ladder() {
        let job = nursing_job(); // requires 5 years

        let exact = UserProfile::new().set_experience(5);
        let close = UserProfile::new().set_experience(4);
        let far = UserProfile::new().set_experience(0);

        assert_eq!(experience_signal(&job, &exact), 1.0);
        assert_eq!(experience_signal(&job, &close), 0.9);
        assert_eq!(experience_signal(&job, &far), 0.2);
    }

    #[test]
    fn test_salary_signal_overlap_and_gap() {
        let job = nursing_job(); // $85k - $105k

        let overlapping = UserProfile::new()
            .set_salary_expectations(SalaryRange::new(100_000.0, 120_000.0));
        assert_eq!(salary_signal(&job, &overlapping), 1.0);

        // Gap of 5k against a 10k-wide expectation: half credit.
        let near = UserProfile::new()
            .set_salary_expectations(SalaryRange::new(110_000.0, 120_000.0));
        assert!((salary_signal(&job, &near) - 0.5).abs() < 1e-9);

        // Far beyond one width of the expectation: zero.
        let far = UserProfile::new()
            .set_salary_expectations(SalaryRange::new(150_000.0, 160_000.0));
        assert_eq!(salary_signal(&job, &far), 0.0);
    }

    #[test]
    fn test_salary_signal_neutral_when_unknown() {
        let no_expectations = UserProfile::new();
        assert_eq!(salary_signal(&nursing_job(), &no_expectations), SALARY_NEUTRAL);

        let job = JobListing::new("job-2", "Nurse", "no pay info").set_salary("competitive");
        let profile =
            UserProfile::new().set_salary_expectations(SalaryRange::new(80_000.0, 100_000.0));
        assert_eq!(salary_signal(&job, &profile), SALARY_NEUTRAL);
    }

    #[test]
    fn test_matching_profile_beats_unrelated_profile() {
        let job = nursing_job();

        let nurse = UserProfile::new()
            .set_skills(["nurse", "icu"])
            .set_experience(5)
            .set_preferred_locations(["sf"])
            .set_preferred_categories(["nursing"]);
        let welder = UserProfile::new()
            .set_skills(["welding"])
            .set_experience(0)
            .set_preferred_locations(["boston"]);

        let a = score_job(&job, &nurse);
        let b = score_job(&job, &welder);
        assert!(a > RECOMMENDATION_SCORE_THRESHOLD);
        assert!(b < a);
        assert!(b <= RECOMMENDATION_SCORE_THRESHOLD);
    }

    #[test]
    fn test_match_reasons_priority_and_cap() {
        let job = nursing_job();
        let profile = UserProfile::new()
            .set_skills(["nurse", "icu", "critical care"])
            .set_preferred_locations(["san francisco"])
            .set_preferred_categories(["nursing"]);

        let reasons = match_reasons(&job, &profile);
        assert_eq!(reasons.len(), MAX_MATCH_REASONS);
        assert!(reasons[0].contains("nurse"));
    }

    #[test]
    fn test_match_reasons_empty_for_unrelated_profile() {
        let job = JobListing::new("job-9", "Welder", "Structural welding on site");
        let profile = UserProfile::new().set_skills(["nurse"]);
        assert!(match_reasons(&job, &profile).is_empty());
    }
}
