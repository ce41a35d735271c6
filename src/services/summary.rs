use serde::Serialize;

use crate::scoring::{GameResult, Grade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
}

/// Aggregate view over one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub graded: usize,
    pub mean_total_score: Option<f64>,
    pub grade_distribution: Vec<GradeCount>,
    pub margin_correlation: Option<f64>,
}

pub fn summarize(results: &[GameResult]) -> Summary {
    Summary {
        games: results.len(),
        graded: graded(results).count(),
        mean_total_score: mean_total_score(results),
        grade_distribution: grade_distribution(results),
        margin_correlation: margin_correlation(results),
    }
}

/// Highest total first; ungraded games go last.
pub fn rank_results(mut results: Vec<GameResult>) -> Vec<GameResult> {
    results.sort_by(|a, b| {
        b.is_graded()
            .cmp(&a.is_graded())
            .then_with(|| b.total_score.total_cmp(&a.total_score))
    });
    results
}

pub fn grade_distribution(results: &[GameResult]) -> Vec<GradeCount> {
    Grade::ALL
        .into_iter()
        .map(|grade| GradeCount {
            grade,
            count: results.iter().filter(|r| r.grade == grade).count(),
        })
        .collect()
}

pub fn mean_total_score(results: &[GameResult]) -> Option<f64> {
    let scores: Vec<f64> = graded(results).map(|r| r.total_score).collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Pearson correlation between closing-stretch margin and total score.
///
/// `None` with fewer than two graded games or when either series is constant.
pub fn margin_correlation(results: &[GameResult]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = graded(results)
        .map(|r| (r.average_margin, r.total_score))
        .collect();
    pearson(&pairs)
}

fn graded(results: &[GameResult]) -> impl Iterator<Item = &GameResult> {
    results.iter().filter(|r| r.is_graded())
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (cov, var_x, var_y) = pairs.iter().fold((0.0, 0.0, 0.0), |(cov, vx, vy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (cov + dx * dy, vx + dx * dx, vy + dy * dy)
    });

    if var_x <= f64::EPSILON || var_y <= f64::EPSILON {
        return None;
    }

    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
