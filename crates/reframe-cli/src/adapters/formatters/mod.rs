//! Terminal Formatters
//!
//! Turn domain results into colored text for the terminal.

use colored::Colorize;

use reframe::{DistortionAnalysis, GratitudeEntry, SeverityTier, StreakUpdate, UserRecord};

/// Detected distortions with their prompts, followed by the tier message
pub fn format_analysis(analysis: &DistortionAnalysis) -> String {
    let mut out = String::new();

    for detection in &analysis.detections {
        out.push_str(&format!(
            "{} {} ({})\n    {}\n",
            "⚠".yellow(),
            detection.category.bold(),
            format!("\"{}\"", detection.trigger).dimmed(),
            detection.prompt
        ));
    }

    let message = match analysis.tier {
        SeverityTier::None => analysis.message().green(),
        SeverityTier::Mild => analysis.message().yellow(),
        SeverityTier::Multiple => analysis.message().red(),
    };
    out.push_str(&message.to_string());
    out
}

/// Current streak and last entry
pub fn format_streak(record: &UserRecord) -> String {
    let last = if record.last_entry.is_empty() {
        "never".to_string()
    } else {
        record.last_entry.clone()
    };
    format!(
        "🔥 Streak: {} day{} (last entry: {})",
        record.streak.to_string().green().bold(),
        if record.streak == 1 { "" } else { "s" },
        last.dimmed()
    )
}

/// One line describing a check-in
pub fn format_streak_update(update: StreakUpdate, streak: u32) -> String {
    match update {
        StreakUpdate::Unchanged => format!("Already checked in today. Streak: {}", streak),
        StreakUpdate::Extended => format!("{} Streak extended to {} days!", "✓".green(), streak),
        StreakUpdate::Started => {
            format!("{} New streak started. Come back tomorrow!", "✓".green())
        }
    }
}

/// Gratitude entries as a bulleted list
pub fn format_gratitude<'a>(entries: impl IntoIterator<Item = &'a GratitudeEntry>) -> String {
    let lines: Vec<String> = entries
        .into_iter()
        .map(|g| format!("  {} {}", g.date.dimmed(), g.entry))
        .collect();

    if lines.is_empty() {
        "No gratitude entries yet.".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reframe::analyze;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_analysis_lists_prompts() {
        plain();
        let out = format_analysis(&analyze("I always fail"));
        assert!(out.contains("All-or-nothing thinking"));
        assert!(out.contains("\"always\""));
        assert!(out.contains("Is it really always?"));
        assert!(out.ends_with(SeverityTier::Mild.message()));
    }

    #[test]
    fn test_analysis_without_detections() {
        plain();
        let out = format_analysis(&analyze("A calm afternoon"));
        assert_eq!(out, SeverityTier::None.message());
    }

    #[test]
    fn test_streak_pluralization() {
        plain();
        let mut record = UserRecord::default();
        assert!(format_streak(&record).contains("0 days (last entry: never)"));

        record.streak = 1;
        record.last_entry = "2026-10-16".to_string();
        assert!(format_streak(&record).contains("1 day (last entry: 2026-10-16)"));
    }

    #[test]
    fn test_gratitude_list() {
        plain();
        assert_eq!(
            format_gratitude(Vec::<&GratitudeEntry>::new()),
            "No gratitude entries yet."
        );

        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let entries = vec![
            GratitudeEntry::new(day, "rain"),
            GratitudeEntry::new(day, "friends"),
        ];
        let out = format_gratitude(&entries);
        assert_eq!(out, "  2026-10-16 rain\n  2026-10-16 friends");
    }

    #[test]
    fn test_streak_update_lines() {
        plain();
        assert!(format_streak_update(StreakUpdate::Extended, 4).contains("4 days"));
        assert!(format_streak_update(StreakUpdate::Unchanged, 4).contains("Already"));
    }
}
