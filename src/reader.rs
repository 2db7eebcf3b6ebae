//! Stdin reader: parses `<name> <arrival> <service>` lines and feeds
//! [`Scheduler::add_process`]. Grounded on `scheduler_read_processes` in
//! `scheduling/scheduler.c`.

use std::io::BufRead;

use crate::process::{Process, Tick};
use crate::scheduler::Scheduler;

pub const PROMPT: &str =
    "Enter processes in the following format (enter blank line to quit):\n\n<Name> <Arrival Time> <Service Time>";

/// Reads lines of the form `<name> <arrival:int> <service:int>` until EOF or
/// a blank line, adding each to `scheduler`. Malformed lines print a
/// diagnostic to stderr and are skipped, not fatal. Returns the number of
/// processes added.
pub fn read_processes(scheduler: &Scheduler, input: impl BufRead) -> std::io::Result<usize> {
    println!("{PROMPT}\n");

    let mut added = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        match parse_line(&line) {
            Some((name, arrival, service)) => {
                println!("Added : Process {name} Arrival {arrival:02} Service {service:02}");
                scheduler.add_process(Process::new(name, arrival, service));
                added += 1;
            }
            None => {
                eprintln!("Sorry, invalid format or could not scan.  Please try again.");
            }
        }
    }
    println!();

    Ok(added)
}

fn parse_line(line: &str) -> Option<(String, Tick, Tick)> {
    let mut fields = line.split_whitespace();

    let name = fields.next()?;
    if name.len() > 99 {
        return None;
    }

    let arrival: Tick = fields.next()?.parse().ok()?;
    let service: Tick = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    if arrival < 0 || service < 0 {
        return None;
    }

    Some((name.to_string(), arrival, service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::fcfs;
    use std::io::Cursor;

    #[test]
    fn parses_well_formed_lines() {
        assert_eq!(parse_line("A 0 3"), Some(("A".to_string(), 0, 3)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("A 0"), None);
        assert_eq!(parse_line("A x 3"), None);
        assert_eq!(parse_line("A -1 3"), None);
        assert_eq!(parse_line("A 0 3 extra"), None);
    }

    #[test]
    fn rejects_overlong_names() {
        let long_name = "x".repeat(100);
        assert_eq!(parse_line(&format!("{long_name} 0 3")), None);
    }

    #[test]
    fn stops_at_blank_line_and_reports_count() {
        let scheduler = Scheduler::new(Box::new(fcfs::new()));
        let input = Cursor::new("A 0 3\nB 1 2\n\nC 2 1\n");
        let added = read_processes(&scheduler, input).unwrap();
        assert_eq!(added, 2, "reader stops at the first blank line");
    }

    #[test]
    fn skips_malformed_lines_without_stopping() {
        let scheduler = Scheduler::new(Box::new(fcfs::new()));
        let input = Cursor::new("A 0 3\nbroken line here\nB 1 2\n");
        let added = read_processes(&scheduler, input).unwrap();
        assert_eq!(added, 2);
    }
}
