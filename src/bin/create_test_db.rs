use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use rollcall_rs::initialize_db;

/// A utility for creating a test database for the REST API server of rollcall_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test students...");

    for (name, email, grade, roll_number) in [
        ("Alice", "alice@example.com", "A", "101"),
        ("Bob", "bob@example.com", "B", "102"),
        ("Charlie", "charlie@example.com", "C", "103"),
    ] {
        conn.execute(
            "INSERT INTO student (name, email, grade, roll_number) VALUES (?1, ?2, ?3, ?4)",
            (name, email, grade, roll_number),
        )?;
    }

    println!("Success!");

    Ok(())
}
