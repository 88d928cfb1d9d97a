use climate_seasons::analyzers::{SeasonalAnalyzer, StationAnalyzer};
use climate_seasons::models::{Dataset, Month, Observation, SeasonMap};
use climate_seasons::readers::MonthlyCsvReader;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;

// Synthetic consolidated data: every station reports every month of every year
fn create_test_dataset(station_count: usize, years: usize) -> Dataset {
    let seasons = SeasonMap::southern_hemisphere();
    let mut observations = Vec::with_capacity(station_count * years * 12);

    for station in 0..station_count {
        for year in 0..years {
            for month in Month::ALL {
                let base = 15.0 + (station as f64) * 0.1;
                let swing = ((month.index() as f64) - 5.5).abs() * 1.5;
                observations.push(Observation {
                    station: format!("Station {}", station),
                    month,
                    season: seasons.season_of(month),
                    temperature: base + swing + (year % 3) as f64 * 0.2,
                });
            }
        }
    }

    Dataset::new(observations)
}

fn create_test_table(station_count: usize) -> String {
    let mut table = String::from("STATION_NAME");
    for month in Month::ALL {
        table.push(',');
        table.push_str(month.name());
    }
    table.push('\n');

    for station in 0..station_count {
        table.push_str(&format!("Station {}", station));
        for month in Month::ALL {
            table.push_str(&format!(",{:.1}", 10.0 + month.index() as f64));
        }
        table.push('\n');
    }

    table
}

fn benchmark_reshaping(c: &mut Criterion) {
    let table = create_test_table(1000);
    let reader = MonthlyCsvReader::default();

    c.bench_function("melt_1000_stations", |b| {
        b.iter(|| {
            reader
                .read_bytes(black_box(table.as_bytes()), Path::new("bench.csv"))
                .unwrap()
        })
    });
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for station_count in [10, 100, 1000].iter() {
        let dataset = create_test_dataset(*station_count, 30);

        group.bench_with_input(
            BenchmarkId::new("seasonal_means", station_count),
            &dataset,
            |b, dataset| b.iter(|| SeasonalAnalyzer::new().analyze(black_box(dataset))),
        );

        group.bench_with_input(
            BenchmarkId::new("station_extremes", station_count),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let analyzer = StationAnalyzer::new();
                    let stations = analyzer.aggregate(black_box(dataset));
                    let largest = analyzer.largest_range(&stations).len();
                    (largest, analyzer.stability(&stations))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_reshaping, benchmark_aggregation);
criterion_main!(benches);
