//! Plugging in a custom reporter.
//!
//! A reporter is any `Fn(&ErrorContext)` (or a type implementing `Reporter`)
//! and is called synchronously after every raise. This one counts errors per
//! kind and reuses the default line format.

use std::sync::{Arc, Mutex};

use errslot::{check, prelude::*, reporter::ReportLine};

#[derive(Debug, Default)]
struct Tally {
    checks: usize,
    others: usize,
}

fn main() {
    let tally = Arc::new(Mutex::new(Tally::default()));
    let sink = Arc::clone(&tally);

    let mut context = ErrorContext::with_reporter(move |context: &ErrorContext| {
        let Some(error) = context.error() else {
            return;
        };
        let mut tally = sink.lock().unwrap();
        if error.error_kind() == ErrorKind::Check {
            tally.checks += 1;
        } else {
            tally.others += 1;
        }
        println!("{}", ReportLine::for_current_process(error));
    });

    check::equals(&mut context, "abc", "abd");
    check::not_null(&mut context, &None::<&str>);
    raise_user!(&mut context, "inventory mismatch", 17);

    println!("{:?}", tally.lock().unwrap());
}
