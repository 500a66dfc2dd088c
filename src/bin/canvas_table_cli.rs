//! CLI tool for canvas-table - lays out a table JSON file and prints the
//! resulting layout snapshot as JSON
//!
//! Usage:
//!   canvas_table_cli <table.json>                        # 800x600 viewport, offsets 0,0
//!   canvas_table_cli <table.json> <width> <height>
//!   canvas_table_cli <table.json> <width> <height> <offset_x> <offset_y>

#![allow(clippy::exit)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use canvas_table::layout::ScrollOffsets;
use canvas_table::{CanvasTable, DataTable, TableConfig};

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Option<T> {
    let raw = args.get(index)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => fail(&format!("Invalid {name}: {raw}")),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        fail("Usage: canvas_table_cli <table.json> [width height [offset_x offset_y]]");
    }

    let input_path = &args[1];
    let width = parse_arg(&args, 2, "width").unwrap_or(DEFAULT_WIDTH);
    let height = parse_arg(&args, 3, "height").unwrap_or(DEFAULT_HEIGHT);
    let offset_x = parse_arg(&args, 4, "offset_x").unwrap_or(0);
    let offset_y = parse_arg(&args, 5, "offset_y").unwrap_or(0);

    // Read input file
    let json = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => fail(&format!("Error reading {input_path}: {e}")),
    };

    let data = match DataTable::from_json(&json) {
        Ok(table) => table,
        Err(e) => fail(&format!("Error loading table: {e}")),
    };

    let mut table = CanvasTable::new(Box::new(data), TableConfig::default());
    table.resize(width, height);
    table.set_offsets(ScrollOffsets::new(offset_x, offset_y));

    let output = match serde_json::to_string_pretty(table.snapshot()) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error serializing layout: {e}")),
    };

    let mut stdout = io::stdout();
    if let Err(e) = writeln!(stdout, "{output}") {
        fail(&format!("Error writing output: {e}"));
    }
}
