//! Terminal Rendering
//!
//! Text rendition of a view state for the command-line client: the loading
//! line, an error alert, the empty placeholder, or a table / card list
//! followed by the total count.

use crate::fetch::ViewState;
use crate::records::{
    ActivityRow, Layout, LeaderboardRow, Resource, TeamRow, UserRow, WorkoutRow,
};

/// A row that knows its terminal columns
pub trait Present: Resource {
    /// Column headers; for card layouts the first one titles the card
    fn columns() -> &'static [&'static str];

    /// Cell text, one per column
    fn cells(&self) -> Vec<String>;
}

impl Present for UserRow {
    fn columns() -> &'static [&'static str] {
        &[
            "Hero Name",
            "Real Name (Alias)",
            "Email",
            "Team",
            "Fitness Level",
            "Total Points",
            "Joined",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.alias.clone(),
            self.email.clone(),
            self.team.clone(),
            self.fitness_level.clone(),
            self.points(),
            self.joined(),
        ]
    }
}

impl Present for TeamRow {
    fn columns() -> &'static [&'static str] {
        &["Team", "Description", "Members", "Created"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.members_label(),
            self.created(),
        ]
    }
}

impl Present for WorkoutRow {
    fn columns() -> &'static [&'static str] {
        &["Workout", "Description", "Difficulty", "Duration", "Calories"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.difficulty.clone(),
            self.duration(),
            self.calories(),
        ]
    }
}

impl Present for ActivityRow {
    fn columns() -> &'static [&'static str] {
        &["User", "Activity Type", "Duration", "Distance", "Calories", "Date"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.activity_type.clone(),
            self.duration(),
            self.distance(),
            self.calories(),
            self.day(),
        ]
    }
}

impl Present for LeaderboardRow {
    fn columns() -> &'static [&'static str] {
        &["Rank", "Hero Name", "Team", "Total Points", "Last Updated"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank_badge(),
            self.user.clone(),
            self.team.clone(),
            self.points(),
            self.updated(),
        ]
    }
}

/// Render whatever the view currently shows
pub fn render_view<R: Present>(state: &ViewState<R>) -> String {
    let kind = R::KIND;

    match state {
        ViewState::Loading => kind.loading_message(),
        ViewState::Failed(message) => format!("Error! {}", message),
        ViewState::Ready(rows) => {
            let mut out = format!("{} {}\n{}\n\n", kind.icon(), kind.title(), kind.subtitle());

            if rows.is_empty() {
                out.push_str(kind.empty_message());
                out.push('\n');
            } else {
                match kind.layout() {
                    Layout::Table => out.push_str(&render_table(rows)),
                    Layout::Cards => out.push_str(&render_cards(rows)),
                }
            }

            out.push_str(&format!("\n{}: {}", kind.count_label(), rows.len()));
            out
        }
    }
}

fn render_table<R: Present>(rows: &[R]) -> String {
    let columns = R::columns();
    let cells: Vec<Vec<String>> = rows.iter().map(R::cells).collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<&str>| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| pad(value, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(columns.to_vec());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    out.push('\n');
    for row in &cells {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

fn render_cards<R: Present>(rows: &[R]) -> String {
    let columns = R::columns();
    let mut out = String::new();

    for row in rows {
        let cells = row.cells();
        let mut fields = columns.iter().zip(cells.iter());

        if let Some((_, title)) = fields.next() {
            out.push_str(&format!("[ {} ]\n", title));
        }
        for (label, value) in fields {
            out.push_str(&format!("  {}: {}\n", label, value));
        }
        out.push('\n');
    }
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}
