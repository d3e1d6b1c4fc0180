//! Output formatting utilities

use crate::application::{DashboardSummary, EntryAnalysis, EntryDetail, EntryListing};
use crate::domain::{ColorToken, MoodClass};

pub const NO_MATCHES: &str = "No journal entries match your search";

/// Format a journal listing, one entry per line
pub fn format_listing(listing: &EntryListing) -> String {
    if listing.is_empty() {
        let mut output = format!("{}\n", NO_MATCHES);
        if listing.query.has_filters() {
            output.push_str("Clear filters: run 'moodlog list' without --search and --mood\n");
        }
        return output;
    }

    let mut output = String::new();
    for row in &listing.rows {
        output.push_str(&format!(
            "{}  #{:<3} {:>2}/10  {:<12} {}  [{}]\n",
            row.entry.date.format("%Y-%m-%d"),
            row.entry.id,
            row.entry.mood,
            row.entry.mood_label,
            row.entry.title,
            row.class.color.name()
        ));
    }
    output
}

/// Format a mood classification on one line
pub fn format_class(mood: u8, class: &MoodClass) -> String {
    format!("{}/10  {}  {}", mood, class.label, class.color)
}

fn format_chips(chips: &[(String, ColorToken)]) -> String {
    chips
        .iter()
        .map(|(name, color)| format!("{} [{}]", name, color.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a single entry
pub fn format_detail(detail: &EntryDetail) -> String {
    let entry = &detail.entry;
    let mut output = format!(
        "#{} {}\n{}\nMood: {} ({})\n",
        entry.id,
        entry.title,
        entry.date.format("%Y-%m-%d"),
        format_class(entry.mood, &detail.class),
        entry.mood_label
    );
    if !detail.emotions.is_empty() {
        output.push_str(&format!("Emotions: {}\n", format_chips(&detail.emotions)));
    }
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');
    output
}

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary) -> String {
    if summary.entry_count == 0 {
        return "No journal entries yet\n".to_string();
    }

    let mut output = format!("Entries: {}\n", summary.entry_count);

    if let (Some(avg), Some(class)) = (summary.average_mood, &summary.average_class) {
        output.push_str(&format!(
            "Average mood: {:.1}/10  {}  {}\n",
            avg, class.label, class.color
        ));
    }

    output.push_str("\nMood trend:\n");
    for point in &summary.trend {
        output.push_str(&format!(
            "  {}  {:>2}  {:<10} {}\n",
            point.date.format("%Y-%m-%d"),
            point.mood,
            "#".repeat(usize::from(point.mood)),
            point.class.label
        ));
    }

    output.push_str("\nRecent entries:\n");
    for row in &summary.recent {
        output.push_str(&format!(
            "  {}  #{}  {}  {}/10 {}\n",
            row.entry.date.format("%Y-%m-%d"),
            row.entry.id,
            row.entry.title,
            row.entry.mood,
            row.class.label
        ));
    }

    if !summary.emotions.is_empty() {
        output.push_str("\nEmotions:\n");
        for share in &summary.emotions {
            output.push_str(&format!(
                "  {:<14} {:>3}%  [{}]\n",
                share.name,
                share.percent,
                share.color.name()
            ));
        }
    }

    output
}

/// Format an analysis result
pub fn format_analysis(analysis: &EntryAnalysis) -> String {
    let mut output = format!(
        "Detected mood: {}\n\nEmotions:\n",
        format_class(analysis.report.mood, &analysis.class)
    );
    for (emotion, color) in analysis.report.emotions.iter().zip(&analysis.emotion_colors) {
        output.push_str(&format!(
            "  {:<12} {:>3}%  [{}]\n",
            emotion.name,
            emotion.score,
            color.name()
        ));
    }
    output.push_str(&format!("\n{}\n", analysis.report.summary));
    output
}
