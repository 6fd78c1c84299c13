// Rust guideline compliant 2026-10-19

//! Output formatting module for the Leitner CLI.
//!
//! This module provides functionality for formatting flashcards, statistics
//! and course listings in various output formats (JSON, table, plain text).

use crate::context::NotInitialized;
use leitner_core::schedule::next_review_date;
use leitner_core::{CourseCount, Flashcard, OutputFormat, Stats};
use serde_json::{json, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting Leitner data in different output formats.
pub trait OutputFormatter {
    /// Formats a single card for display.
    fn format_card(&self, card: &Flashcard) -> String;

    /// Formats a list of cards for display.
    fn format_list(&self, cards: &[Flashcard]) -> String;

    /// Formats collection statistics.
    fn format_stats(&self, stats: &Stats) -> String;

    /// Formats the per-course card counts.
    fn format_courses(&self, courses: &[CourseCount]) -> String;

    /// Formats the outcome of a command that changes the collection.
    ///
    /// # Arguments
    /// * `message` - Human-readable summary
    /// * `data` - Machine-readable payload for JSON output
    fn format_success(&self, message: &str, data: &Value) -> String;
}

/// JSON output formatter.
///
/// Formats cards as valid JSON for machine consumption.
pub struct JsonFormatter;

fn to_pretty_json(value: &impl serde::Serialize, what: &str) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": format!("Failed to serialize {}", what) }).to_string())
}

impl OutputFormatter for JsonFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        to_pretty_json(card, "card")
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        to_pretty_json(&json!({ "cards": cards, "total": cards.len() }), "card list")
    }

    fn format_stats(&self, stats: &Stats) -> String {
        to_pretty_json(stats, "statistics")
    }

    fn format_courses(&self, courses: &[CourseCount]) -> String {
        to_pretty_json(
            &json!({ "courses": courses, "total": courses.len() }),
            "course list",
        )
    }

    fn format_success(&self, _message: &str, data: &Value) -> String {
        to_pretty_json(data, "result")
    }
}

fn next_review_label(card: &Flashcard) -> String {
    match next_review_date(card) {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => "now".to_string(),
    }
}

fn colored(prefix: &str, color: Color, use_color: bool) -> String {
    if !use_color {
        return prefix.to_string();
    }
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(buffer, "{}", prefix);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).to_string()
}

/// Table output formatter.
///
/// Formats cards as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", card.id));
        output.push_str(&format!("Front:       {}\n", card.front));
        output.push_str(&format!("Back:        {}\n", card.back));
        output.push_str(&format!("Box:         {}\n", card.leitner_box));
        output.push_str(&format!("Created:     {}\n", card.created_date.to_rfc3339()));
        match card.last_review_date {
            Some(at) => output.push_str(&format!("Reviewed:    {}\n", at.to_rfc3339())),
            None => output.push_str("Reviewed:    never\n"),
        }
        output.push_str(&format!("Next review: {}\n", next_review_label(card)));
        output.push_str(&format!(
            "Reviews:     {} ({} correct, {}%)\n",
            card.review_count,
            card.correct_count,
            card.accuracy()
        ));

        if let Some(ref course_id) = card.course_id {
            output.push_str(&format!("Course:      {}\n", course_id));
        }
        if let Some(ref lesson_id) = card.lesson_id {
            output.push_str(&format!("Lesson:      {}\n", lesson_id));
        }

        output
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Box", "Next review", "Course", "Front", "Back"]);

        for card in cards {
            builder.push_record(vec![
                card.id.clone(),
                card.leitner_box.to_string(),
                next_review_label(card),
                card.course_id.clone().unwrap_or_default(),
                card.front.clone(),
                card.back.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_stats(&self, stats: &Stats) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Metric".to_string(), "Value".to_string()]);
        builder.push_record(vec!["Total cards".to_string(), stats.total.to_string()]);
        builder.push_record(vec!["Due now".to_string(), stats.cards_due.to_string()]);
        for (level, count) in &stats.box_distribution {
            builder.push_record(vec![format!("Box {}", level), count.to_string()]);
        }
        builder.push_record(vec!["Reviews".to_string(), stats.total_reviews.to_string()]);
        builder.push_record(vec!["Correct".to_string(), stats.total_correct.to_string()]);
        builder.push_record(vec![
            "Success rate".to_string(),
            format!("{}%", stats.success_rate),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_courses(&self, courses: &[CourseCount]) -> String {
        if courses.is_empty() {
            return "No courses found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Course".to_string(), "Cards".to_string()]);
        for course in courses {
            builder.push_record(vec![course.id.clone(), course.count.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_success(&self, message: &str, _data: &Value) -> String {
        format!("{} {}", colored("✓", Color::Green, self.use_color), message)
    }
}

/// Plain text output formatter.
///
/// Formats cards as simple tab-separated text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_card(&self, card: &Flashcard) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", card.id));
        output.push_str(&format!("{}\n", card.front));
        output.push_str(&format!("{}\n", card.back));
        output.push_str(&format!("{}\n", card.leitner_box));
        output.push_str(&format!("{}\n", next_review_label(card)));

        output
    }

    fn format_list(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards found.".to_string();
        }

        let mut output = String::new();
        for card in cards {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                card.id, card.leitner_box, card.front, card.back
            ));
        }
        output
    }

    fn format_stats(&self, stats: &Stats) -> String {
        let mut output = String::new();
        output.push_str(&format!("total\t{}\n", stats.total));
        output.push_str(&format!("due\t{}\n", stats.cards_due));
        for (level, count) in &stats.box_distribution {
            output.push_str(&format!("box{}\t{}\n", level, count));
        }
        output.push_str(&format!("reviews\t{}\n", stats.total_reviews));
        output.push_str(&format!("correct\t{}\n", stats.total_correct));
        output.push_str(&format!("success_rate\t{}\n", stats.success_rate));
        output
    }

    fn format_courses(&self, courses: &[CourseCount]) -> String {
        courses
            .iter()
            .map(|course| format!("{}\t{}\n", course.id, course.count))
            .collect()
    }

    fn format_success(&self, message: &str, _data: &Value) -> String {
        message.to_string()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}

/// Returns the stable code reported for a command failure.
pub fn error_code(err: &anyhow::Error) -> Value {
    if let Some(core) = err.downcast_ref::<leitner_core::Error>() {
        return serde_json::to_value(core.kind()).unwrap_or(Value::Null);
    }
    if err.downcast_ref::<NotInitialized>().is_some() {
        return Value::from("not_initialized");
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return Value::from("persistence_failure");
    }
    Value::from("internal")
}

/// Builds the `{ "code", "message" }` envelope printed for failures in JSON mode.
pub fn error_envelope(err: &anyhow::Error) -> Value {
    json!({
        "code": error_code(err),
        "message": format!("{:#}", err),
    })
}
