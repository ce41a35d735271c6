use std::fmt::Write;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use super::summary::Summary;
use crate::domain::PeriodLine;
use crate::errors::parse_context;
use crate::scoring::{GameResult, Grade};

const RULE_WIDTH: usize = 78;

/// JSON shape of the `rank` command output
#[derive(Debug, Serialize)]
pub struct RankingReport<'a> {
    pub games: &'a [GameResult],
    pub summary: &'a Summary,
}

/// Ranked table, one line per game
pub fn render_table(results: &[GameResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<10}  {:<12}  {:<14}  {:>6}  {:<5}  {:>6}",
        "#", "Date", "Game ID", "Matchup", "Score", "Grade", "Margin"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for (rank, result) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<10}  {:<12}  {:<14}  {:>6.1}  {}  {:>6.2}",
            rank + 1,
            date_label(result),
            result.game_id,
            result.matchup,
            result.total_score,
            paint_grade(result.grade, 5),
            result.average_margin,
        );
    }

    out
}

/// Breakdown, raw metrics and line score for a single game
pub fn render_detail(result: &GameResult, line_score: &[PeriodLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({})",
        result.matchup.bold(),
        result.game_id,
        date_label(result)
    );
    let _ = writeln!(
        out,
        "Total Score: {:.1}  Grade: {}",
        result.total_score,
        paint_grade(result.grade, 0)
    );

    if !result.is_graded() {
        let _ = writeln!(out, "No play-by-play data available for this game.");
        return out;
    }

    let _ = writeln!(out);
    for (component, value) in result.breakdown.iter() {
        let _ = writeln!(out, "  {:<18}{:>6.1}", component.label(), value);
    }

    let metrics = &result.metrics;
    let _ = writeln!(out);
    let _ = writeln!(out, "  Periods played     {}", metrics.periods);
    let _ = writeln!(out, "  Lead changes       {}", metrics.lead_changes);
    let _ = writeln!(out, "  Buzzer beater      {}", yes_no(metrics.buzzer_beater));
    let _ = writeln!(out, "  Final margin       {}", metrics.final_margin);
    let _ = writeln!(out, "  Closing margin     {:.2}", result.average_margin);
    let _ = writeln!(out, "  Top scorer points  {}", metrics.max_points);

    if !line_score.is_empty() {
        let _ = writeln!(out);
        out.push_str(&render_line_score(line_score));
    }

    out
}

pub fn render_line_score(lines: &[PeriodLine]) -> String {
    let mut header = format!("  {:<6}", "");
    let mut away = format!("  {:<6}", "Away");
    let mut home = format!("  {:<6}", "Home");

    for line in lines {
        let _ = write!(header, "{:>5}", period_label(line.period));
        let _ = write!(away, "{:>5}", line.away);
        let _ = write!(home, "{:>5}", line.home);
    }

    let away_total: u32 = lines.iter().map(|l| l.away).sum();
    let home_total: u32 = lines.iter().map(|l| l.home).sum();
    let _ = write!(header, "{:>6}", "T");
    let _ = write!(away, "{:>6}", away_total);
    let _ = write!(home, "{:>6}", home_total);

    format!("{}\n{}\n{}\n", header, away, home)
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Games analyzed: {} ({} graded)", summary.games, summary.graded);

    match summary.mean_total_score {
        Some(mean) => {
            let _ = writeln!(out, "Mean score: {:.1}", mean);
        }
        None => {
            let _ = writeln!(out, "Mean score: n/a");
        }
    }

    let distribution: Vec<String> = summary
        .grade_distribution
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| format!("{} x{}", paint_grade(entry.grade, 0), entry.count))
        .collect();
    if !distribution.is_empty() {
        let _ = writeln!(out, "Grades: {}", distribution.join(", "));
    }

    if let Some(correlation) = summary.margin_correlation {
        let _ = writeln!(out, "Margin/score correlation: {:.3}", correlation);
    }

    out
}

/// Pretty JSON for downstream renderers
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| parse_context("report JSON"))
}

fn paint_grade(grade: Grade, width: usize) -> ColoredString {
    let text = format!("{:<width$}", grade.as_str(), width = width);
    match grade {
        Grade::APlus | Grade::A => text.magenta().bold(),
        Grade::BPlus | Grade::B => text.cyan(),
        Grade::CPlus | Grade::C => text.red(),
        Grade::D => text.bright_red(),
        Grade::NotAvailable => text.dimmed(),
    }
}

fn date_label(result: &GameResult) -> String {
    result
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn period_label(period: u8) -> String {
    if period <= 4 {
        format!("Q{}", period)
    } else {
        format!("OT{}", period - 4)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::GameInfo;
    use crate::services::summary::summarize;

    fn plain() {
        colored::control::set_override(false);
    }

    fn graded_result() -> GameResult {
        let info = GameInfo::new(
            "0022300061",
            NaiveDate::from_ymd_opt(2024, 1, 15),
            "LAL @ BOS",
        );
        let mut result = GameResult::unavailable(&info);
        result.total_score = 88.4;
        result.grade = Grade::A;
        result.average_margin = 3.25;
        result.breakdown.period_scores = 45.0;
        result.breakdown.margin = 25.0;
        result.metrics.periods = 4;
        result.metrics.lead_changes = 9;
        result
    }

    #[test]
    fn test_render_table() {
        plain();
        let unavailable = GameResult::unavailable(&GameInfo::new("0022300099", None, "MIA @ NYK"));
        let table = render_table(&[graded_result(), unavailable]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("2024-01-15"));
        assert!(lines[2].contains("88.4"));
        assert!(lines[2].contains("A "));
        assert!(lines[3].contains("N/A"));
        assert!(lines[3].trim_start().starts_with('2'));
    }

    #[test]
    fn test_render_detail() {
        plain();
        let line_score = vec![
            PeriodLine { period: 1, away: 25, home: 30 },
            PeriodLine { period: 5, away: 10, home: 8 },
        ];
        let detail = render_detail(&graded_result(), &line_score);

        assert!(detail.contains("Total Score: 88.4"));
        assert!(detail.contains("Shooting%"));
        assert!(detail.contains("Lead changes       9"));
        assert!(detail.contains("OT1"));
        assert!(detail.contains("35"));
    }

    #[test]
    fn test_render_detail_unavailable() {
        plain();
        let result = GameResult::unavailable(&GameInfo::new("1", None, "AAA @ BBB"));
        let detail = render_detail(&result, &[]);

        assert!(detail.contains("N/A"));
        assert!(detail.contains("No play-by-play"));
        assert!(!detail.contains("Margin"));
    }

    #[test]
    fn test_render_line_score_totals() {
        let rendered = render_line_score(&[
            PeriodLine { period: 1, away: 20, home: 22 },
            PeriodLine { period: 2, away: 31, home: 18 },
        ]);
        let away = rendered.lines().nth(1).unwrap();

        assert!(away.starts_with("  Away"));
        assert!(away.trim_end().ends_with("51"));
    }

    #[test]
    fn test_render_summary() {
        plain();
        let summary = summarize(&[graded_result()]);
        let rendered = render_summary(&summary);

        assert!(rendered.contains("Games analyzed: 1 (1 graded)"));
        assert!(rendered.contains("Mean score: 88.4"));
        assert!(rendered.contains("A x1"));
        assert!(!rendered.contains("correlation"));
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&graded_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["grade"], "A");
        assert_eq!(value["breakdown"]["Period Scores"], 45.0);
    }
}
