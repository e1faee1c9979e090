use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use evec::Vector;

/// Runs `f`, which must panic, and returns the file the panic was reported at.
fn panic_file<F: FnOnce()>(f: F) -> Option<String> {
    let file = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&file);

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        *sink.lock().unwrap() = info.location().map(|l| l.file().to_string());
    }));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    assert!(result.is_err(), "expected a panic");
    let recorded = file.lock().unwrap().clone();
    recorded
}

// The panic hook is process wide, so every case lives in one test.
#[test]
fn test_operator_panics_point_at_the_caller() {
    let short = Vector::with_dimension(2);
    let long = Vector::with_dimension(3);

    let cases: Vec<(&str, Box<dyn FnOnce() + '_>)> = vec![
        ("index", Box::new(|| {
            let _ = short[5];
        })),
        ("index_mut", Box::new(|| {
            let mut v = short.clone();
            v[5] = 1.0;
        })),
        ("add", Box::new(|| {
            let _ = &short + &long;
        })),
        ("owned add", Box::new(|| {
            let _ = short.clone() + long.clone();
        })),
        ("sub", Box::new(|| {
            let _ = short.clone() - &long;
        })),
        ("dot", Box::new(|| {
            let _ = &short * &long;
        })),
        ("add_assign", Box::new(|| {
            let mut v = short.clone();
            v += &long;
        })),
        ("sub_assign", Box::new(|| {
            let mut v = short.clone();
            v -= &long;
        })),
    ];

    for (name, case) in cases {
        let file = panic_file(case);
        assert!(
            file.as_deref().is_some_and(|f| f.ends_with("panic_location.rs")),
            "{} panicked at {:?}",
            name,
            file
        );
    }
}
