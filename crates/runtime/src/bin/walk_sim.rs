//! Scripted walk through the navigator.
//!
//! Types the destination name into the search box one character at a
//! time, picks the first result, then replays a route of location and
//! heading samples until the arrival pulse fires.
//!
//! Usage:
//!   cargo run -p wayfinder_runtime --bin walk_sim -- [OPTIONS]
//!
//! Options:
//!   --route <FILE>        JSON route script (default: built-in demo walk)
//!   --param <NAME=VALUE>  Override a parameter, repeatable (e.g. NAV_ARRIVE_RAD=30)

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use wayfinder_core::navigation::NavigationState;
use wayfinder_runtime::logging::init_tracing;
use wayfinder_runtime::sim::{RecordingFeedback, RouteScript, StaticSearchProvider};
use wayfinder_runtime::{log_error, log_info, log_warn, Navigator, NavigatorConfig};

/// Pause between simulated keystrokes
const TYPING_INTERVAL: Duration = Duration::from_millis(120);

/// Give up this long after the route runs out
const ARRIVAL_GRACE: Duration = Duration::from_secs(5);

struct Args {
    route: Option<String>,
    params: Vec<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        route: None,
        params: Vec::new(),
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--route" => {
                i += 1;
                args.route = Some(required_value(&raw, i, "route"));
            }
            "--param" => {
                i += 1;
                args.params.push(required_value(&raw, i, "param"));
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn required_value(raw: &[String], i: usize, name: &str) -> String {
    raw.get(i).cloned().unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: walk_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --route <FILE>        JSON route script (default: built-in demo walk)\n\
         \x20 --param <NAME=VALUE>  Override a parameter, repeatable\n\
         \x20 -h, --help            Show this help"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = parse_args();
    init_tracing();

    let store = match NavigatorConfig::parameter_store(args.params.iter().map(String::as_str)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    for row in store.iter() {
        let marker = if row.is_default { "" } else { " (override)" };
        log_info!("{:<16} = {}{}", row.name, row.value, marker);
    }
    let config = match NavigatorConfig::from_store(&store) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let heading_interval = config.heading_interval;

    let route = match &args.route {
        Some(path) => match RouteScript::load(path) {
            Ok(route) => route,
            Err(e) => {
                eprintln!("Error: cannot load route {path}: {e}");
                process::exit(1);
            }
        },
        None => RouteScript::demo(),
    };

    let provider = StaticSearchProvider::new()
        .with_results(route.query(), vec![route.destination_place()])
        .with_latency(Duration::from_millis(300));
    let feedback = RecordingFeedback::new();
    let handle = Navigator::spawn(config, Arc::new(provider.clone()), feedback.clone());

    let location_task = handle.attach_location_feed(route.location_feed());
    let heading_task = handle.attach_heading_feed(route.heading_feed(heading_interval));

    let mut results = handle.search_results();
    let query = route.query().to_string();
    let mut typed = String::new();
    for ch in query.chars() {
        typed.push(ch);
        if handle.query_changed(typed.clone()).await.is_err() {
            log_error!("navigator stopped while typing");
            process::exit(1);
        }
        tokio::time::sleep(TYPING_INTERVAL).await;
    }

    let destination = loop {
        if results.changed().await.is_err() {
            log_error!("navigator stopped before results arrived");
            process::exit(1);
        }
        let current = results.borrow_and_update().clone();
        if current.query == query {
            match current.places.into_iter().next() {
                Some(place) => break place,
                None => {
                    log_warn!("no results for {:?}", query);
                    process::exit(1);
                }
            }
        }
    };
    log_info!(
        "{} provider call(s) for {} keystrokes",
        provider.call_count(),
        query.chars().count()
    );

    if handle.set_destination(destination).await.is_err() {
        log_error!("navigator stopped before navigation began");
        process::exit(1);
    }

    let mut navigation = handle.navigation();
    let walk_time = route.step() * (route.points.len() as u32 + 1) + ARRIVAL_GRACE;
    let deadline = tokio::time::sleep(walk_time);
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                log_info!("shutdown requested");
                break;
            }
            _ = &mut deadline => {
                log_warn!("route ended without arrival");
                break;
            }
            changed = navigation.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = navigation.borrow_and_update().clone();
                log_info!(
                    "distance {:>7.1} m  arrow {:>7.1} deg  heading {:>6.1} deg",
                    snapshot.distance_m,
                    snapshot.direction_angle_deg,
                    snapshot.heading_deg
                );
                if snapshot.state == NavigationState::Arrived {
                    log_info!("arrived ({} pulse)", feedback.pulses());
                    break;
                }
            }
        }
    }

    location_task.abort();
    heading_task.abort();
    if let Err(e) = handle.shutdown().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
