// Built-in project list
//
// Shown whenever the data file can't be fetched or doesn't parse.

use crate::content::models::{ProjectLink, ProjectRecord};

const GITHUB: &str = "https://github.com/sxsohh";

/// The compiled-in project list, in display order
pub fn default_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "Late-Game Fouling Assistant",
            "2025",
            "Reads the game clock and score to flag when fouling up three beats \
             playing it out. Built from a season of my own team's late-game film.",
        )
        .with_tags(["Python", "OpenCV", "Basketball"])
        .with_link(ProjectLink::new("GitHub", GITHUB)),
        ProjectRecord::new(
            "Shot Chart Explorer",
            "2024",
            "Loads play-by-play data into SQLite and draws shot charts by lineup, \
             quarter and shot clock.",
        )
        .with_tags(["SQL", "Python", "Data Viz"])
        .with_link(ProjectLink::new("GitHub", GITHUB)),
        ProjectRecord::new(
            "Projectile Lab Simulator",
            "2023–2024",
            "Physics lab companion that fits drag coefficients to measured arcs \
             and compares them with the ideal parabola.",
        )
        .with_tags(["Physics", "NumPy", "Matplotlib"]),
        ProjectRecord::new(
            "Practice Load Tracker",
            "2023",
            "Logs minutes, sprints and sleep to keep training load in a safe band \
             through the season.",
        )
        .with_tags(["Spreadsheets", "Sports Science"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::validate_projects;

    #[test]
    fn test_defaults_not_empty() {
        assert!(!default_projects().is_empty());
    }

    #[test]
    fn test_defaults_are_valid() {
        // the fallback list has to survive the same checks as fetched data
        assert!(validate_projects(&default_projects()).is_ok());
    }

    #[test]
    fn test_defaults_stable_order() {
        let first = default_projects();
        let second = default_projects();
        assert_eq!(first, second);
        assert_eq!(first[0].title, "Late-Game Fouling Assistant");
    }
}
