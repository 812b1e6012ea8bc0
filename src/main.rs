use crate::error::StoreError;
use crate::flight::{Flight, FlightStatus};
use crate::passenger::Passenger;
use crate::store::{FlightStore, LoadReport, PassengerStore, TicketStore};
use crate::ticket::Ticket;
use crate::time::DateTime;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tabled::Tabled;
use tabled::settings::Style;

mod error;
mod flight;
mod passenger;
mod scenario;
mod seatmap;
mod store;
mod ticket;
mod time;

const FLIGHTS_FILE: &str = "flights.txt";
const PASSENGERS_FILE: &str = "passengers.txt";
const TICKETS_FILE: &str = "tickets.txt";

type Shell = Editor<CompleteHelper, DefaultHistory>;

#[derive(Parser)]
struct Args {
    /// Directory holding the persisted record files
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Optional JSON scenario used to seed the stores on startup
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let Ok(mut pager) = pager else {
        println!("{content}");
        return;
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show_table<T: Tabled>(rows: &[T]) {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

#[derive(Tabled)]
struct PassengerRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: i32,
    #[tabled(rename = "Passport")]
    passport: String,
    #[tabled(rename = "Flight")]
    flight: String,
    #[tabled(rename = "Seat")]
    seat: String,
}

fn passenger_rows(store: &PassengerStore) -> Vec<PassengerRow> {
    store
        .iter()
        .map(|p| PassengerRow {
            name: p.name.clone(),
            age: p.age,
            passport: p.passport.clone(),
            flight: assignment_label(p.assigned_flight_id),
            seat: assignment_label(p.assigned_seat_no),
        })
        .collect()
}

fn assignment_label(value: i32) -> String {
    if value == 0 { "not assigned".to_string() } else { value.to_string() }
}

fn status_colored(status: FlightStatus) -> colored::ColoredString {
    match status {
        FlightStatus::OnTime => "On Time".green(),
        FlightStatus::Delayed => "Delayed".yellow(),
        FlightStatus::Cancelled => "Cancelled".red(),
    }
}

fn print_flight_card(flight: &Flight) {
    println!("\n--- Flight Found ---");
    println!("Flight ID      : {}", flight.id);
    println!("Name           : {}", flight.name);
    println!("From           : {}", flight.origin);
    println!("To             : {}", flight.destination);
    println!("Departure      : {}", flight.departure);
    println!("Arrival        : {}", flight.arrival);
    println!("Status         : {}", status_colored(flight.status));
    println!("Seats Available: {}", flight.available_seats);
    println!("--------------------");
}

fn report_load(kind: &str, outcome: Result<LoadReport, StoreError>) {
    match outcome {
        Ok(report) if report.missing_file => {
            println!("No {kind} data file found. Starting with an empty {kind} list.");
        }
        Ok(report) => {
            println!("Loaded {} {kind} records.", report.loaded);
            if report.clamped {
                println!("{}", format!("Declared {kind} count exceeded capacity; extra records ignored.").yellow());
            }
            if let Some(stopped) = report.stopped {
                println!("{}", format!("Stopped early: {stopped}. Keeping what was read.").yellow());
            }
        }
        Err(err) => println!("{}", format!("Could not load {kind}: {err}").red()),
    }
}

fn save_all(dir: &Path, flights: &FlightStore, passengers: &PassengerStore, tickets: &TicketStore) {
    if let Err(err) = std::fs::create_dir_all(dir) {
        println!("{}", format!("Could not create {}: {err}", dir.display()).red());
    }
    report_save("flights", flights.save(&dir.join(FLIGHTS_FILE)));
    report_save("passengers", passengers.save(&dir.join(PASSENGERS_FILE)));
    report_save("tickets", tickets.save(&dir.join(TICKETS_FILE)));
}

fn report_save(kind: &str, outcome: Result<(), StoreError>) {
    match outcome {
        Ok(()) => println!("{}", format!("{kind} saved successfully.").green()),
        Err(err) => println!("{}", format!("Could not save {kind}: {err}").red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    println!("Flight desk online. Data directory: {}", args.data_dir.display());

    let mut flights = FlightStore::new();
    let mut passengers = PassengerStore::new();
    let mut tickets = TicketStore::new();

    report_load("flight", flights.load(&args.data_dir.join(FLIGHTS_FILE)));
    report_load("passenger", passengers.load(&args.data_dir.join(PASSENGERS_FILE)));
    report_load("ticket", tickets.load(&args.data_dir.join(TICKETS_FILE)));

    if let Some(path) = &args.scenario {
        match scenario::seed_from_file(path, &mut flights, &mut passengers, &mut tickets) {
            Ok(summary) => {
                println!(
                    "Seeded {} flights, {} passengers and {} tickets from {}.",
                    summary.flights,
                    summary.passengers,
                    summary.tickets,
                    path.display()
                );
                for rejected in &summary.rejected {
                    println!("{}", format!("Skipped {rejected}.").yellow());
                }
            }
            Err(err) => {
                println!("{}", format!("Could not read scenario {}: {err}", path.display()).red());
            }
        }
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "find".to_string(),
            "add".to_string(),
            "sort".to_string(),
            "rm".to_string(),
            "passengers".to_string(),
            "register".to_string(),
            "unregister".to_string(),
            "tickets".to_string(),
            "book".to_string(),
            "cancel".to_string(),
            "seats".to_string(),
            "save".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl: Shell = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let sub = parts.get(1).map(|s| *s).unwrap_or("a");
                        let filtered: Vec<&Flight> = flights
                            .iter()
                            .filter(|f| match sub {
                                "o" | "ontime" => f.status == FlightStatus::OnTime,
                                "d" | "delayed" => f.status == FlightStatus::Delayed,
                                "c" | "cancelled" => f.status == FlightStatus::Cancelled,
                                _ => true, // 'ls' or 'ls a'
                            })
                            .collect();
                        if filtered.is_empty() {
                            println!("No matching flights found.");
                        } else {
                            show_table(&filtered);
                        }
                    },
                    "find" => {
                        match parts.get(1).and_then(|id| id.parse::<i32>().ok()) {
                            Some(id) => match flights.search(id) {
                                Some(flight) => print_flight_card(flight),
                                None => println!("Flight with ID {id} not found."),
                            },
                            None => println!("Usage: find <flight_id>"),
                        }
                    },
                    "add" => report_entry(add_flight_flow(&mut rl, &mut flights)),
                    "sort" => {
                        if flights.sort_by_departure() {
                            println!("Flights sorted by departure time.");
                        } else {
                            println!("Not enough flights to sort.");
                        }
                    },
                    "rm" => {
                        match parts.get(1).and_then(|id| id.parse::<i32>().ok()) {
                            Some(id) => match flights.remove(id) {
                                Ok(()) => println!("Flight with ID {id} deleted successfully."),
                                Err(err) => println!("{}", err.to_string().red()),
                            },
                            None => println!("Usage: rm <flight_id>"),
                        }
                    },
                    "passengers" => {
                        if passengers.is_empty() {
                            println!("No passengers registered.");
                        } else {
                            show_table(&passenger_rows(&passengers));
                        }
                    },
                    "register" => report_entry(register_passenger_flow(&mut rl, &mut passengers)),
                    "unregister" => {
                        match parts.get(1) {
                            Some(passport) => match passengers.remove(passport) {
                                Ok(()) => println!("Passenger with passport {passport} removed."),
                                Err(err) => println!("{}", err.to_string().red()),
                            },
                            None => println!("Usage: unregister <passport>"),
                        }
                    },
                    "tickets" => {
                        if tickets.is_empty() {
                            println!("No tickets booked.");
                        } else {
                            let rows: Vec<&Ticket> = tickets.iter().collect();
                            show_table(&rows);
                        }
                    },
                    "book" => report_entry(book_ticket_flow(&mut rl, &mut tickets)),
                    "cancel" => {
                        match parts.get(1).and_then(|id| id.parse::<i32>().ok()) {
                            Some(id) => match tickets.cancel(id) {
                                Ok(()) => {
                                    println!("Ticket ID {id} cancelled successfully. Total tickets: {}", tickets.len());
                                }
                                Err(err) => println!("{}", err.to_string().red()),
                            },
                            None => println!("Usage: cancel <ticket_id>"),
                        }
                    },
                    "seats" => {
                        match parts.get(1).and_then(|id| id.parse::<i32>().ok()) {
                            Some(id) => {
                                let booked: Vec<(i32, &str)> = tickets.booked_seats(id).collect();
                                if booked.is_empty() {
                                    println!("No seats booked for this flight.");
                                } else {
                                    println!("Seats booked on flight {id}:");
                                    for (seat, passenger) in booked {
                                        println!("  Seat {seat}: {passenger}");
                                    }
                                }
                            }
                            None => println!("Usage: seats <flight_id>"),
                        }
                    },
                    "save" => save_all(&args.data_dir, &flights, &passengers, &tickets),
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [status]           - List flights, or filter by status: o - on time, d - delayed, c - cancelled");
                        println!("  find <id>             - Show one flight in full");
                        println!("  add                   - Add a flight (prompts field by field)");
                        println!("  sort                  - Sort flights by departure time");
                        println!("  rm <id>               - Delete a flight");
                        println!("  passengers            - List registered passengers");
                        println!("  register              - Register a passenger");
                        println!("  unregister <passport> - Remove a passenger");
                        println!("  tickets               - List booked tickets");
                        println!("  book                  - Book a ticket");
                        println!("  cancel <ticket_id>    - Cancel a ticket");
                        println!("  seats <flight_id>     - List booked seats for a flight");
                        println!("  save                  - Write all records to disk now");
                        println!("  help / ?              - Show this help menu");
                        println!("  exit / quit           - Save and exit\n");
                    },
                    "exit" | "quit" => {
                        save_all(&args.data_dir, &flights, &passengers, &tickets);
                        break;
                    },
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                save_all(&args.data_dir, &flights, &passengers, &tickets);
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn prompt(rl: &mut Shell, label: &str) -> rustyline::Result<String> {
    Ok(rl.readline(&format!("{label}: "))?.trim().to_string())
}

fn prompt_int(rl: &mut Shell, label: &str) -> rustyline::Result<Option<i32>> {
    Ok(prompt(rl, label)?.parse().ok())
}

fn report_entry(outcome: rustyline::Result<()>) {
    if let Err(err) = outcome {
        match err {
            ReadlineError::Interrupted | ReadlineError::Eof => println!("Entry cancelled."),
            err => println!("Error: {:?}", err),
        }
    }
}

fn parse_datetime_entry(input: &str) -> Option<DateTime> {
    let mut parts = input.split_whitespace();
    let date = parts.next()?;
    let time = parts.next()?;
    DateTime::parse(date, time)
}

fn add_flight_flow(rl: &mut Shell, flights: &mut FlightStore) -> rustyline::Result<()> {
    let Some(id) = prompt_int(rl, "flight ID")? else {
        println!("Invalid flight ID. Please enter a number.");
        return Ok(());
    };
    if flights.search(id).is_some() {
        println!("{}", format!("Flight with ID {id} already exists.").red());
        return Ok(());
    }
    let name = prompt(rl, "flight name")?;
    let origin = prompt(rl, "origin")?;
    let destination = prompt(rl, "destination")?;
    let Some(departure) = parse_datetime_entry(&prompt(rl, "departure (DD-MM-YYYY HH:MM)")?) else {
        println!("Invalid departure date/time format.");
        return Ok(());
    };
    let Some(arrival) = parse_datetime_entry(&prompt(rl, "arrival (DD-MM-YYYY HH:MM)")?) else {
        println!("Invalid arrival date/time format.");
        return Ok(());
    };
    let Some(status) = prompt_int(rl, "status (0 = on time, 1 = delayed, 2 = cancelled)")?
        .and_then(FlightStatus::from_code)
    else {
        println!("Invalid status. Please enter 0, 1 or 2.");
        return Ok(());
    };
    let Some(seats) = prompt_int(rl, "available seats")?.filter(|s| *s > 0) else {
        println!("Invalid number of seats. Please enter a positive number.");
        return Ok(());
    };

    match flights.add(Flight::new(id, &name, &origin, &destination, departure, arrival, status, seats)) {
        Ok(()) => println!("{}", "Flight added successfully.".green()),
        Err(err) => println!("{}", format!("Could not add flight: {err}").red()),
    }
    Ok(())
}

fn register_passenger_flow(rl: &mut Shell, passengers: &mut PassengerStore) -> rustyline::Result<()> {
    let name = prompt(rl, "passenger name")?;
    let Some(age) = prompt_int(rl, "age")?.filter(|a| *a > 0) else {
        println!("Invalid age. Please enter a positive number.");
        return Ok(());
    };
    let passport = prompt(rl, "passport number")?;

    match passengers.add(Passenger::new(&name, age, &passport)) {
        Ok(()) => println!("{}", format!("Passenger {name} registered successfully.").green()),
        Err(err) => println!("{}", format!("Could not register passenger: {err}").red()),
    }
    Ok(())
}

fn book_ticket_flow(rl: &mut Shell, tickets: &mut TicketStore) -> rustyline::Result<()> {
    let passenger_name = prompt(rl, "passenger name")?;
    let Some(flight_id) = prompt_int(rl, "flight ID")?.filter(|id| *id > 0) else {
        println!("Invalid flight ID. Please enter a positive number.");
        return Ok(());
    };
    let Some(seat_no) = prompt_int(rl, "seat number")?.filter(|s| *s > 0) else {
        println!("Invalid seat number. Please enter a positive number.");
        return Ok(());
    };

    let id = tickets.book(&passenger_name, flight_id, seat_no);
    println!("{}", format!("Ticket booked successfully. Ticket ID: {id}").green());
    Ok(())
}
