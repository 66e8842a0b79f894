//! Interactive console front-end for the user directory.
//!
//! # Responsibility
//! - Translate menu selections into `UserService` calls.
//! - Keep prompting, parsing and formatting out of the core crate.
//!
//! # Invariants
//! - Malformed input is reported and the loop continues; a rejected
//!   interaction never touches core state.
//! - Choice 9 (and end of input) terminates with exit status 0.

use log::info;
use std::io::{self, Write};
use std::path::Path;

use userdir_core::{
    core_version, default_log_level, init_logging, ExportOutcome, InMemoryUserRepository,
    UserId, UserService,
};

const DEFAULT_EXPORT_FILE: &str = "users.csv";

fn main() {
    if let Err(err) = init_logging(default_log_level(), &log_dir()) {
        eprintln!("Warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let mut service = UserService::new(InMemoryUserRepository::new());

    loop {
        print_menu();
        let Some(choice) = prompt("Enter choice: ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_user(&mut service),
            "2" => view_users(&service),
            "3" => search_user(&service),
            "4" => update_user(&mut service),
            "5" => delete_user(&mut service),
            "6" => {
                service.sort_users_by_name();
                println!("Users sorted by name.");
            }
            "7" => {
                service.sort_users_by_id();
                println!("Users sorted by ID.");
            }
            "8" => export_to_file(&service),
            "9" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice!"),
        }
    }

    info!("event=cli_exit module=cli status=ok");
}

fn print_menu() {
    println!();
    println!("--- User Management System ---");
    println!("1. Add User");
    println!("2. View Users");
    println!("3. Search User");
    println!("4. Update User");
    println!("5. Delete User");
    println!("6. Sort by Name");
    println!("7. Sort by ID");
    println!("8. Export to File");
    println!("9. Exit");
}

fn add_user(service: &mut UserService<InMemoryUserRepository>) {
    let Some((id, name, email)) = prompt_id_name_email("Enter ID, Name, Email: ") else {
        return;
    };

    match service.add_user(id, name, email) {
        Ok(()) => println!("User added successfully!"),
        Err(conflict) => println!("Error: {conflict}"),
    }
}

fn view_users(service: &UserService<InMemoryUserRepository>) {
    let users = service.users();
    if users.is_empty() {
        println!("No users available.");
        return;
    }

    println!("Displaying all the Users");
    for (index, user) in users.iter().enumerate() {
        println!(
            "{}. ID: {}, Name: '{}', Email: '{}'",
            index + 1,
            user.id,
            user.name,
            user.email
        );
    }
}

fn search_user(service: &UserService<InMemoryUserRepository>) {
    let Some(id) = prompt_for_id("Enter ID to search: ") else {
        return;
    };

    match service.find_user(id) {
        Ok(user) => println!(
            "ID: {}, Name: '{}', Email: '{}'",
            user.id, user.name, user.email
        ),
        Err(err) => eprintln!("{err}"),
    }
}

fn update_user(service: &mut UserService<InMemoryUserRepository>) {
    let Some((id, name, email)) =
        prompt_id_name_email("Enter ID to update, then new Name and Email: ")
    else {
        return;
    };

    match service.update_user(id, &name, &email) {
        Ok(()) => println!("User updated successfully!"),
        Err(err) => eprintln!("{err}"),
    }
}

fn delete_user(service: &mut UserService<InMemoryUserRepository>) {
    let Some(id) = prompt_for_id("Enter ID to delete: ") else {
        return;
    };

    match service.delete_user(id) {
        Ok(_) => println!("User deleted successfully!"),
        Err(err) => eprintln!("{err}"),
    }
}

fn export_to_file(service: &UserService<InMemoryUserRepository>) {
    let Some(input) = prompt("Enter filename (e.g., users.csv): ") else {
        return;
    };
    let filename = if input.is_empty() {
        DEFAULT_EXPORT_FILE.to_string()
    } else {
        input
    };

    match service.export_csv(Path::new(&filename)) {
        Ok(ExportOutcome::NothingToExport) => println!("No users to export."),
        Ok(ExportOutcome::Written { path, .. }) => {
            println!("Users exported to {}", path.display());
        }
        Err(err) => eprintln!("Error writing to file: {err}"),
    }
}

/// Reads three whitespace-separated tokens: a numeric id, a name and an email.
fn prompt_id_name_email(label: &str) -> Option<(UserId, String, String)> {
    let line = prompt(label)?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, name, email] = fields.as_slice() else {
        println!("Expected three values: ID, Name, Email.");
        return None;
    };

    let Ok(id) = id.parse::<UserId>() else {
        println!("Invalid ID: '{id}'");
        return None;
    };

    Some((id, (*name).to_string(), (*email).to_string()))
}

fn prompt_for_id(label: &str) -> Option<UserId> {
    let line = prompt(label)?;
    match line.parse::<UserId>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("Invalid ID: '{line}'");
            None
        }
    }
}

/// Prints `label`, flushes stdout and reads one trimmed line.
///
/// Returns `None` at end of input or on a read failure.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            eprintln!("Error reading input: {err}");
            None
        }
    }
}

fn log_dir() -> String {
    std::env::temp_dir()
        .join("userdir-logs")
        .to_string_lossy()
        .into_owned()
}
