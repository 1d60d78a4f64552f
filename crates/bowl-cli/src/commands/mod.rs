pub mod play;
pub mod score;

use comfy_table::{ContentArrangement, Table};

use bowl_core::Game;

/// Build a score-sheet table: one row per frame with marks and totals.
fn render_scorecard(game: &Game) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Frame", "Rolls", "Score", "Total"]);

    let notation = game.to_string();
    let marks: Vec<&str> = notation.split_whitespace().collect();

    for (row, mark) in game.frame_scores().iter().zip(marks) {
        table.add_row(vec![
            row.frame.to_string(),
            mark.to_string(),
            row.score.to_string(),
            row.running_total.to_string(),
        ]);
    }
    table
}
