//! Static skill-synonym and location-alias lexicons.
//!
//! Both tables are process-wide, read-only, and built once on first use.
//! Membership is symmetric: looking up any member of an equivalence class
//! resolves the entire class, so "js" finds "javascript" exactly as
//! "javascript" finds "js". Matching elsewhere in the engine is substring
//! containment over lower-cased text, and the tables are curated with that
//! in mind (aliases short enough to hide inside unrelated words are left
//! out of the location table).

use std::sync::LazyLock;

use ahash::AHashMap;
use aho_corasick::AhoCorasick;

/// Skill equivalence classes: canonical term first, then its synonyms.
static SKILL_TABLE: &[(&str, &[&str])] = &[
    ("javascript", &["js", "react", "typescript", "node", "frontend"]),
    ("python", &["django", "flask", "py"]),
    ("java", &["spring", "jvm", "kotlin"]),
    ("developer", &["engineer", "programmer", "coder"]),
    ("devops", &["docker", "kubernetes", "terraform", "ci/cd"]),
    ("database", &["sql", "postgres", "mysql", "mongodb"]),
    ("designer", &["ux", "figma", "ui design"]),
    ("manager", &["management", "supervisor", "team lead"]),
    ("nurse", &["rn", "registered nurse", "lpn", "nurse practitioner"]),
    ("physician", &["doctor", "md", "hospitalist", "locum tenens"]),
    ("therapist", &["physical therapist", "occupational therapist", "slp"]),
    (
        "technician",
        &["technologist", "lab tech", "radiology tech"],
    ),
];

/// Location alias classes: canonical place first, then its aliases.
static LOCATION_TABLE: &[(&str, &[&str])] = &[
    ("san francisco", &["sf", "bay area", "silicon valley"]),
    ("new york", &["nyc", "manhattan", "brooklyn"]),
    ("los angeles", &["socal", "orange county", "long beach"]),
    ("seattle", &["bellevue", "redmond", "tacoma"]),
    ("austin", &["round rock", "atx"]),
    ("boston", &["cambridge", "somerville"]),
    ("chicago", &["evanston", "naperville"]),
    ("denver", &["boulder", "aurora"]),
    ("remote", &["work from home", "wfh", "telecommute", "anywhere"]),
];

static SKILLS: LazyLock<SynonymLexicon> = LazyLock::new(|| SynonymLexicon::build(SKILL_TABLE));

static LOCATIONS: LazyLock<SynonymLexicon> =
    LazyLock::new(|| SynonymLexicon::build(LOCATION_TABLE));

/// The process-wide skill-synonym table.
pub fn skills() -> &'static SynonymLexicon {
    &SKILLS
}

/// The process-wide location-alias table.
pub fn locations() -> &'static SynonymLexicon {
    &LOCATIONS
}

/// A symmetric term-equivalence table with deterministic iteration order.
#[derive(Debug)]
pub struct SynonymLexicon {
    entries: &'static [(&'static str, &'static [&'static str])],
    /// Every member term (canonical or synonym) to its entry index.
    index: AHashMap<&'static str, usize>,
    /// Automaton over the canonical terms, for scanning free text.
    scanner: AhoCorasick,
}

impl SynonymLexicon {
    fn build(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let mut index = AHashMap::new();
        for (i, (canonical, synonyms)) in entries.iter().enumerate() {
            index.insert(*canonical, i);
            for synonym in *synonyms {
                index.insert(*synonym, i);
            }
        }

        let scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(entries.iter().map(|(canonical, _)| *canonical))
            .expect("lexicon terms build a valid automaton");

        Self {
            entries,
            index,
            scanner,
        }
    }

    /// The full equivalence class for `term`, canonical first, or an empty
    /// vector when the term is not in the table.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let term = term.trim().to_lowercase();
        let Some(&i) = self.index.get(term.as_str()) else {
            return Vec::new();
        };

        let (canonical, synonyms) = self.entries[i];
        let mut class = Vec::with_capacity(synonyms.len() + 1);
        class.push(canonical.to_string());
        class.extend(synonyms.iter().map(|s| s.to_string()));
        class
    }

    /// Whether `term` is a member of any equivalence class.
    pub fn contains_term(&self, term: &str) -> bool {
        self.index.contains_key(term.trim().to_lowercase().as_str())
    }

    /// Canonical terms in table order.
    pub fn canonical_terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(canonical, _)| *canonical)
    }

    /// Canonical terms occurring as (ASCII case-insensitive) substrings of
    /// `text`, deduplicated, in table order.
    ///
    /// The scan is overlapping, so "javascript" in the text reports both
    /// "javascript" and "java".
    pub fn scan_canonicals(&self, text: &str) -> Vec<&'static str> {
        let mut ids: Vec<usize> = self
            .scanner
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter().map(|i| self.entries[i].0).collect()
    }

    /// Whether `candidate` or any member of its class is contained in
    /// `target`. Both sides are lower-cased; empty strings never match.
    pub fn matches_in(&self, candidate: &str, target: &str) -> bool {
        let candidate = candidate.trim().to_lowercase();
        let target = target.to_lowercase();
        if candidate.is_empty() || target.is_empty() {
            return false;
        }
        if target.contains(candidate.as_str()) {
            return true;
        }
        self.expand(&candidate)
            .iter()
            .any(|member| target.contains(member.as_str()))
    }

    /// Number of equivalence classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no classes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
