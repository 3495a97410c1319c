use comfy_table::{ContentArrangement, Table};

use streak_core::Game;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Game", "Rule", "Asks for"]);

    for game in Game::all() {
        table.add_row(vec![
            game.to_string(),
            game.rule().to_string(),
            game.parameters().join(", "),
        ]);
    }

    println!("{table}");
    println!("\n  {} game(s) supported", Game::all().len());
    Ok(())
}
