//! Basic introduction to errslot.
//!
//! This example demonstrates the fundamental concepts:
//! 1. Creating a context with the default stderr reporter
//! 2. Failing fast with check predicates
//! 3. Raising errno, system and user errors
//! 4. Inspecting and resetting the context

use std::fs::File;

use errslot::{check, prelude::*};

/// Check predicates record where they failed and return `false`.
fn pick_worker(context: &mut ErrorContext, workers: i32) -> Option<i32> {
    if !check::greater_than(context, workers, 0) {
        return None;
    }
    Some(workers - 1)
}

/// OS failures carry their error number; the description is looked up for you.
fn open_config(context: &mut ErrorContext, path: &str) -> Option<File> {
    match File::open(path) {
        Ok(file) => Some(file),
        Err(error) => {
            raise_errno!(context, error.raw_os_error().unwrap_or(0));
            None
        }
    }
}

fn main() {
    // Every raise below prints one "ERROR (pid=...)" line to stderr.
    let mut context = ErrorContext::new(true);

    println!("Example 1: a failed check");
    if pick_worker(&mut context, 0).is_none() {
        println!("  kind = {}, message = {:?}", context.kind(), context.message());
    }
    context.reset();

    println!("Example 2: an errno failure");
    if open_config(&mut context, "/nonexistent/config.toml").is_none() {
        println!("  errno = {}", context.errno_code());
    }

    println!("Example 3: user errors overwrite whatever was there");
    raise_user!(&mut context, "no usable configuration", 3);
    if let Some(site) = context.site() {
        println!("  raised in {} at line {}", site.function, site.line);
    }

    println!("Example 4: silence the reporter and switch to `?`");
    context.set_reporting(false);
    raise_system!(&mut context, "clock_gettime returned garbage", -1);
    if let Err(error) = context.take_result(()) {
        println!("  {error}");
    }
}
