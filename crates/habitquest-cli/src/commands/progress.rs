use serde::Serialize;

use super::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressView {
    total_points: u32,
    level: u32,
    points_to_next_level: u32,
    level_progress: u32,
    habits: usize,
    completed_today: usize,
    max_streak: u32,
    total_completed: u32,
    message: &'static str,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let tracker = &session.tracker;
    let progress = tracker.progress();
    let summary = tracker.summary();

    let view = ProgressView {
        total_points: progress.total_points,
        level: progress.level,
        points_to_next_level: tracker.points_to_next_level(),
        level_progress: tracker.level_progress(),
        habits: tracker.habits().len(),
        completed_today: tracker.completed_today_count(),
        max_streak: summary.max_streak,
        total_completed: summary.total_completed,
        message: tracker.motivational_message(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "Level {}  ({} / {} points)",
            view.level, view.total_points, view.points_to_next_level
        );
        println!(
            "Today: {}/{} habits  best streak {}  lifetime {}",
            view.completed_today, view.habits, view.max_streak, view.total_completed
        );
        println!("{}", view.message);
    }
    Ok(())
}
