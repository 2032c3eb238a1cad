//! Plain-text rendering of profiles and dashboard views

use devfolio_core::{ProfileDraft, SkillCount, SkillMatch};
use devfolio_types::Profile;

pub fn print_profile(profile: &Profile) {
    println!();
    println!("{} <{}>", profile.name, profile.email);
    println!("  {}", profile.education);

    if !profile.skills.is_empty() {
        println!("  Skills: {}", profile.skills.join(", "));
    }

    if !profile.work.is_empty() {
        println!("  Work:");
        for entry in &profile.work {
            println!("    {}: {}", entry.title, entry.description);
        }
    }

    if !profile.projects.is_empty() {
        println!("  Projects:");
        for project in &profile.projects {
            println!("    {}: {}", project.title, project.description);
            if let Some(link) = &project.link {
                println!("      {link}");
            }
        }
    }

    if let Some(github) = &profile.links.github {
        println!("  GitHub: {github}");
    }
    if let Some(linkedin) = &profile.links.linkedin {
        println!("  LinkedIn: {linkedin}");
    }
    if let Some(portfolio) = &profile.links.portfolio {
        println!("  Portfolio: {portfolio}");
    }
}

pub fn print_top_skills(ranking: &[SkillCount]) {
    if ranking.is_empty() {
        println!("No skills data available");
        return;
    }

    for (i, entry) in ranking.iter().enumerate() {
        println!("{:>3}. {} ({})", i + 1, entry.skill, entry.count);
    }
}

pub fn print_skill_match(hit: &SkillMatch) {
    println!();
    println!("{} <{}>", hit.name, hit.email);
    println!("  Matching skills: {}", hit.matching_skills.join(", "));

    if !hit.work.is_empty() {
        println!("  Work:");
        for entry in &hit.work {
            println!("    {}: {}", entry.title, entry.description);
        }
    }

    if !hit.projects.is_empty() {
        println!("  Projects:");
        for project in &hit.projects {
            println!("    {}: {}", project.title, project.description);
            if let Some(link) = &project.link {
                println!("      {link}");
            }
        }
    }
}

/// Show the draft with row indices so list commands can target rows
pub fn print_draft(draft: &ProfileDraft) {
    println!();
    println!("Name: {}", draft.name);
    println!("Email: {}", draft.email);
    println!("Education: {}", draft.education);

    println!("Skills:");
    for (i, skill) in draft.skills.items().iter().enumerate() {
        println!("  {i}) {skill}");
    }

    println!("Projects:");
    for (i, project) in draft.projects.items().iter().enumerate() {
        let link = project.link.as_deref().unwrap_or("");
        println!("  {i}) {} | {} | {}", project.title, project.description, link);
    }

    println!("Work:");
    for (i, entry) in draft.work.items().iter().enumerate() {
        println!("  {i}) {} | {}", entry.title, entry.description);
    }

    println!(
        "Links: github={} linkedin={} portfolio={}",
        draft.links.github.as_deref().unwrap_or(""),
        draft.links.linkedin.as_deref().unwrap_or(""),
        draft.links.portfolio.as_deref().unwrap_or("")
    );
}
