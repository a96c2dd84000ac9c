use std::{error::Error, path::Path, process::exit};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, Month, OffsetDateTime, Time};

use finance_tracker::{
    PasswordHash, ValidatedPassword,
    finance::{Category, Finance, FinanceType, create_finance},
    initialize_db,
    reminder::{Reminder, create_reminder},
    user::create_user,
};

/// The email of the demo user.
const DEMO_EMAIL: &str = "demo@example.com";
/// The password of the demo user.
const DEMO_PASSWORD: &str = "test";

/// A utility for creating a test database for the REST API server of finance_tracker.
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

    println!("Creating test user {DEMO_EMAIL} with the password \"{DEMO_PASSWORD}\"...");
    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked(DEMO_PASSWORD),
        PasswordHash::DEFAULT_COST,
    )?;
    let user = create_user(DEMO_EMAIL.parse()?, password_hash, &conn)?;

    let year = OffsetDateTime::now_utc().year();

    println!("Creating finance records for {year}...");
    for month in 1..=12u8 {
        let month = Month::try_from(month)?;
        let first_of_month = Date::from_calendar_date(year, month, 1)?
            .with_time(Time::MIDNIGHT)
            .assume_utc();

        create_finance(
            Finance::build("Salary", 4200.0, FinanceType::Income, Category::Salary)
                .created_at(first_of_month),
            user.id,
            &conn,
        )?;
        create_finance(
            Finance::build("Groceries", 320.5, FinanceType::Expense, Category::Food)
                .created_at(first_of_month + Duration::days(3)),
            user.id,
            &conn,
        )?;
        create_finance(
            Finance::build(
                "Power bill",
                145.0,
                FinanceType::Expense,
                Category::Utilities,
            )
            .created_at(first_of_month + Duration::days(14)),
            user.id,
            &conn,
        )?;
    }

    println!("Creating reminders...");
    let today = OffsetDateTime::now_utc().date();
    create_reminder(
        Reminder::build("Rent", 1200.0, today + Duration::days(7)),
        user.id,
        &conn,
    )?;
    create_reminder(
        Reminder::build("Internet", 80.0, today + Duration::days(21)),
        user.id,
        &conn,
    )?;
    create_reminder(
        Reminder::build("Car insurance", 410.0, today - Duration::days(10)).is_paid(true),
        user.id,
        &conn,
    )?;

    println!("Success!");

    Ok(())
}
