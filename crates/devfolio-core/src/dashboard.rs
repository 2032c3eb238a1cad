//! Dashboard aggregations
//!
//! The hub API has no query support, so the dashboard fetches every profile
//! and derives its views locally: a skill frequency ranking and a
//! search-by-skill listing.

use devfolio_types::{Profile, ProjectEntry, WorkEntry};
use tracing::debug;

/// One row of the skill frequency ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Count each distinct skill string across all profiles
///
/// Matching is case-sensitive and exact. The result is ordered by count
/// descending; ties keep the order in which the skill was first
/// encountered (the sort is stable).
pub fn top_skills(profiles: &[Profile]) -> Vec<SkillCount> {
    let mut counts: Vec<SkillCount> = Vec::new();

    for profile in profiles {
        for skill in &profile.skills {
            match counts.iter_mut().find(|c| c.skill == *skill) {
                Some(entry) => entry.count += 1,
                None => counts.push(SkillCount {
                    skill: skill.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    debug!("Ranked {} distinct skills", counts.len());
    counts
}

/// A profile that matched a skill search
///
/// Carries the subset of skills that matched the query and the profile's
/// full project/work lists, unfiltered.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub name: String,
    pub email: String,
    pub matching_skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub work: Vec<WorkEntry>,
}

/// Find every profile with at least one skill containing `query`
///
/// The match is a case-insensitive substring test. A blank query returns no
/// results rather than all profiles.
pub fn search_by_skill(profiles: &[Profile], query: &str) -> Vec<SkillMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    profiles
        .iter()
        .filter_map(|profile| {
            let matching_skills: Vec<String> = profile
                .skills
                .iter()
                .filter(|s| s.to_lowercase().contains(&query))
                .cloned()
                .collect();

            if matching_skills.is_empty() {
                return None;
            }

            Some(SkillMatch {
                name: profile.name.clone(),
                email: profile.email.clone(),
                matching_skills,
                projects: profile.projects.clone(),
                work: profile.work.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, skills: &[&str]) -> Profile {
        Profile {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            education: "CS".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            projects: vec![ProjectEntry::new("Crawler", "Fetches pages", None)],
            work: vec![WorkEntry::new("Engineer", "Backend work")],
            links: Default::default(),
        }
    }

    #[test]
    fn test_top_skills_ranking() {
        let profiles = vec![
            profile("Ada", &["Go", "Go", "Rust"]),
            profile("Grace", &["Go"]),
        ];

        let ranked = top_skills(&profiles);
        assert_eq!(
            ranked,
            vec![
                SkillCount {
                    skill: "Go".to_string(),
                    count: 3
                },
                SkillCount {
                    skill: "Rust".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_top_skills_ties_keep_first_seen_order() {
        let profiles = vec![
            profile("Ada", &["Zig", "Ada"]),
            profile("Grace", &["COBOL", "COBOL"]),
        ];

        let ranked = top_skills(&profiles);
        let names: Vec<&str> = ranked.iter().map(|c| c.skill.as_str()).collect();
        // COBOL wins on count; Zig and Ada tie at 1 and stay in first-seen order
        assert_eq!(names, vec!["COBOL", "Zig", "Ada"]);
    }

    #[test]
    fn test_top_skills_is_case_sensitive() {
        let profiles = vec![profile("Ada", &["go", "Go"])];
        let ranked = top_skills(&profiles);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_search_matches_substring_case_insensitive() {
        let profiles = vec![
            profile("Ada", &["Golang", "Rust"]),
            profile("Grace", &["COBOL"]),
        ];

        let hits = search_by_skill(&profiles, "go");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ada");
        assert_eq!(hits[0].matching_skills, vec!["Golang".to_string()]);
        // Full lists ride along unfiltered
        assert_eq!(hits[0].projects.len(), 1);
        assert_eq!(hits[0].work.len(), 1);
    }

    #[test]
    fn test_search_blank_query_returns_nothing() {
        let profiles = vec![profile("Ada", &["Rust"])];
        assert!(search_by_skill(&profiles, "").is_empty());
        assert!(search_by_skill(&profiles, "   ").is_empty());
    }

    #[test]
    fn test_search_no_hits() {
        let profiles = vec![profile("Ada", &["Rust"])];
        assert!(search_by_skill(&profiles, "fortran").is_empty());
    }
}
