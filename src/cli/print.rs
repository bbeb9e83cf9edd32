use colored::Colorize;
use lunchvote::controllers::admin::EditorGrid;
use lunchvote::controllers::voting::{Leaderboard, Recommendation, ResultsBoard, VotingPage};
use lunchvote::controllers::{MessageLevel, ViewMessage};
use lunchvote::model::Restaurant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CARD_WIDTH: usize = 30;
const BAR_WIDTH: usize = 40;
const NAME_COL_WIDTH: usize = 22;

pub(crate) fn print_messages(messages: &[ViewMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_recommendation(rec: &Recommendation) {
    print_messages(&rec.messages);
    let Some(card) = &rec.card else {
        return;
    };

    println!();
    println!("  {}", card.name.bold());
    println!("  Menu:     {}", card.menu);
    println!("  Distance: {}", card.distance);
    println!("  Map:      {}", card.map_link.underline());
    if let Some(photo) = &card.photo_url {
        println!("  Photo:    {}", photo.dimmed());
    }
}

pub(crate) fn print_board(board: &Leaderboard) {
    print_messages(&board.messages);
    let Some(selector) = board.selector else {
        return;
    };

    println!(
        "{}",
        format!(
            "Top {} of {} restaurant(s). Vote with `lunchvote vote <position>` (see `list`).",
            selector.selected, selector.max
        )
        .dimmed()
    );
    println!();

    for chunk in &board.grid {
        let cells: Vec<[String; 4]> = chunk
            .iter()
            .map(|card| {
                [
                    card.name.clone(),
                    format!("{} ({})", card.menu, card.distance),
                    format!("♥ {} vote(s)", card.votes),
                    card.map_link.clone(),
                ]
            })
            .collect();

        for line in 0..4 {
            let mut rendered = String::new();
            for cell in &cells {
                let text = truncate_to_width(&cell[line], CARD_WIDTH - 2);
                let padding = CARD_WIDTH.saturating_sub(text.width());
                rendered.push_str(&text);
                rendered.push_str(&" ".repeat(padding));
            }
            let rendered = rendered.trim_end().to_string();
            match line {
                0 => println!("  {}", rendered.bold()),
                3 => println!("  {}", rendered.dimmed()),
                _ => println!("  {}", rendered),
            }
        }
        println!();
    }
}

pub(crate) fn print_results(results: &ResultsBoard) {
    print_messages(&results.messages);
    if results.chart.is_empty() {
        return;
    }

    let max_votes = results.chart.iter().map(|b| b.votes).max().unwrap_or(0);
    for bar in &results.chart {
        let name = truncate_to_width(&bar.name, NAME_COL_WIDTH);
        let padding = NAME_COL_WIDTH.saturating_sub(name.width());
        let filled = if max_votes == 0 {
            0
        } else {
            (bar.votes as usize * BAR_WIDTH) / max_votes as usize
        };
        println!(
            "  {}{} │{} {}",
            name,
            " ".repeat(padding),
            "█".repeat(filled).cyan(),
            bar.votes
        );
    }

    println!();
    let header = format!("{:<w$}", "RESTAURANT", w = NAME_COL_WIDTH);
    println!("  {} {}", header.bold(), "VOTES".bold());
    for (name, votes) in &results.table {
        let display = truncate_to_width(name, NAME_COL_WIDTH);
        let padding = NAME_COL_WIDTH.saturating_sub(display.width());
        println!("  {}{} {}", display, " ".repeat(padding), votes);
    }
}

pub(crate) fn print_page(page: &VotingPage) {
    println!("{}", "⭐ Top picks".bold());
    println!();
    print_board(&page.leaderboard);
    println!("{}", "📊 Current results".bold());
    println!();
    print_results(&page.results);
}

pub(crate) fn print_list(rows: &[Restaurant]) {
    if rows.is_empty() {
        println!("No restaurants yet.");
        return;
    }
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3}. {}  {} ({})  ♥ {}",
            i + 1,
            row.name.bold(),
            row.menu,
            row.distance,
            row.votes
        );
        println!("     {}", row.map_link.dimmed());
    }
}

pub(crate) fn print_editor_grid(grid: &EditorGrid) {
    let titles: Vec<String> = grid
        .columns
        .iter()
        .map(|c| c.title.to_uppercase())
        .collect();
    println!("{}", titles.join("  ").bold());

    for row in &grid.rows {
        let short_id: String = row.id.to_string().chars().take(8).collect();
        println!(
            "{}  {}  {}  {}  {}  {}  {}",
            short_id.dimmed(),
            row.name,
            row.menu,
            row.distance,
            truncate_to_width(&row.map_link, 30).underline(),
            truncate_to_width(row.photo().unwrap_or("-"), 30).dimmed(),
            row.votes
        );
    }
    println!();
    println!(
        "{}",
        "Edit a CSV copy and apply it with `lunchvote admin save <file>`.".dimmed()
    );
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
