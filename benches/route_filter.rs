use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bus_reservation::flow::catalog::filter_routes;
use bus_reservation::models::Route;

const CITIES: [&str; 8] = ["Chennai", "Bangalore", "Madurai", "Mysore", "Pune", "Mumbai", "Goa", "Hyderabad"];

fn synthetic_routes(count: u64) -> Vec<Route> {
    (0..count)
        .map(|id| {
            let origin = CITIES[(id % 8) as usize];
            let destination = CITIES[((id + 3) % 8) as usize];
            Route {
                id,
                bus_name: if id % 5 == 0 { format!("Express {id}") } else { format!("Sleeper {id}") },
                origin: origin.to_string(),
                destination: destination.to_string(),
                capacity: Some(40),
                price: Some(450.0),
                departure_time: None,
                arrival_time: None,
            }
        })
        .collect()
}

fn benchmark_route_filter(c: &mut Criterion) {
    let routes = synthetic_routes(5_000);

    // One keystroke in the catalog search box
    c.bench_function("filter_routes_term", |b| {
        b.iter(|| filter_routes(black_box(&routes), black_box("express")));
    });

    c.bench_function("filter_routes_empty_term", |b| {
        b.iter(|| filter_routes(black_box(&routes), black_box("")));
    });
}

criterion_group!(benches, benchmark_route_filter);
criterion_main!(benches);
