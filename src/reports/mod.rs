use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use devgalaxy::galaxy::{GalaxyStatistics, PositionedPlanet, RenderMode, RenderSurface};
use serde_json::json;

/// Prints whatever the scene presents. `json` switches to machine output.
pub struct TerminalSurface {
    pub json: bool,
}

impl RenderSurface for TerminalSurface {
    fn present(&mut self, planets: &[PositionedPlanet], stats: &GalaxyStatistics, mode: RenderMode) {
        if self.json {
            let doc = json!({
                "mode": mode,
                "planets": planets,
                "statistics": stats,
            });
            match serde_json::to_string_pretty(&doc) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("❌ Failed to encode galaxy: {}", e),
            }
            return;
        }

        match mode {
            RenderMode::Orbital => print_orbit_table(planets),
            RenderMode::Flat => print_card_list(planets),
        }
        print_statistics(stats);
    }
}

pub fn print_orbit_table(planets: &[PositionedPlanet]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Owner").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y").fg(Color::Cyan),
        Cell::new("Z"),
        Cell::new("Color"),
        Cell::new("Size"),
        Cell::new("Rings"),
        Cell::new("Likes").fg(Color::Green),
        Cell::new("Views"),
    ]);

    for i in [0, 2, 3, 4, 6, 7, 8, 9] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, p) in planets.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&p.owner_label).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", p.position.x)),
            Cell::new(format!("{:.2}", p.position.y)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", p.position.z)),
            Cell::new(&p.color),
            Cell::new(format!("{:.1}", p.size)),
            Cell::new(p.ring_count),
            Cell::new(p.like_count).fg(Color::Green),
            Cell::new(p.view_count),
        ]);
    }
    println!("\n🪐 Orbit\n{}", table);
}

pub fn print_card_list(planets: &[PositionedPlanet]) {
    println!("\n📇 Profiles");
    for p in planets {
        let langs: Vec<&str> = p.stack.languages.iter().map(String::as_str).collect();
        println!(
            "  • {:<20} ♥ {:<5} 👁 {:<6} {}",
            p.owner_label,
            p.like_count,
            p.view_count,
            langs.join(", ")
        );
    }
}

pub fn print_statistics(stats: &GalaxyStatistics) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Planets"),
        Cell::new(stats.planet_count).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Tech Stack Total"),
        Cell::new(stats.tech_stack_total).set_alignment(CellAlignment::Right),
    ]);
    println!("\n{}", table);
}
