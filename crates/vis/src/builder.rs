//! Builds the charts of a benchmark history.
//!
//! Runs are processed from the oldest to the most recent one. The first
//! time a package shows up, one chart per [MetricKind] is created for it,
//! with one dataset per benchmark the package reported in that run. The
//! following runs append their measurements to these datasets; benchmarks
//! that were not reported when the package was first seen are not charted.
//!
//! After each run, datasets that did not get a value from it are padded
//! with `NaN` placeholders, so every dataset holds exactly one point per
//! processed run.

use std::rc::Rc;

use benchtrend_runs::Fetch;
use benchtrend_runs::Labeler;
use benchtrend_runs::Run;
use benchtrend_runs::Suite;
use benchtrend_runs::sort_by_date;
use log::debug;
use log::error;
use log::info;
use log::warn;
use rand::Rng;

use crate::chart::Chart;
use crate::chart::ChartHandle;
use crate::chart::DataPoint;
use crate::chart::Dataset;
use crate::color::ColorCursor;
use crate::layout::Canvas;
use crate::layout::ElementKind;
use crate::layout::Section;
use crate::layout::View;
use crate::metric::MetricKind;
use crate::registry::ChartKey;
use crate::registry::ChartRegistry;

const CANVAS_WRAPPER_CLASS: &str = "canvaswrapper";

/// Populates a [View] with the charts of the runs found at a location.
pub struct RunSeriesBuilder<F, R> {
    fetcher: F,
    rng: R,
    labeler: Labeler,
}

impl<F, R> RunSeriesBuilder<F, R>
where
    F: Fetch,
    R: Rng,
{
    /// Creates a builder loading runs with `fetcher` and picking the
    /// colors of each package with `rng`.
    pub fn new(fetcher: F, rng: R) -> RunSeriesBuilder<F, R> {
        Self {
            fetcher,
            rng,
            labeler: Labeler::default(),
        }
    }

    /// Sets the labeler of the runs.
    pub fn with_labeler(mut self, labeler: Labeler) -> RunSeriesBuilder<F, R> {
        self.labeler = labeler;
        self
    }

    /// Loads the runs found at `source` and adds one group of charts per
    /// package to `container`.
    ///
    /// When the runs cannot be loaded, a single text element holding the
    /// error message is added to `container` instead.
    pub fn build(&mut self, container: &mut View, source: &str) {
        let runs = match self.fetcher.fetch(source) {
            Ok(runs) => runs,
            Err(err) => {
                error!("Loading the benchmark runs from `{source}` failed: {err}");
                container.push(ElementKind::Text(err.to_string()));
                return;
            }
        };

        let registry = self.chart_runs(container, runs);
        if registry.is_empty() {
            warn!("No benchmarks were found at `{source}`.");
        } else {
            info!("Created {} charts from `{source}`.", registry.len());
        }
    }

    /// Adds the charts of already loaded runs to `container` and returns
    /// the registry of the created charts.
    pub fn chart_runs(&mut self, container: &mut View, mut runs: Vec<Run>) -> ChartRegistry {
        sort_by_date(&mut runs);

        let labels: Rc<[String]> = self.labeler.labels(&runs).into();
        let mut registry = ChartRegistry::new();
        let mut timeline = Vec::with_capacity(runs.len());

        for (index, run) in runs.iter().enumerate() {
            let t = run.timestamp_millis();
            timeline.push(t);

            debug!(
                "Processing run {}/{}: {}",
                index + 1,
                runs.len(),
                labels[index]
            );

            for suite in &run.suites {
                if registry.contains(&suite.pkg, MetricKind::NsPerOp) {
                    append_points(&registry, index, t, suite);
                } else {
                    let group = self.create_charts(&mut registry, &labels, index, t, suite);
                    container.push(ElementKind::Section(group));
                }
            }

            registry.fill_gaps(&timeline);
        }

        registry
    }

    fn create_charts(
        &mut self,
        registry: &mut ChartRegistry,
        labels: &Rc<[String]>,
        index: usize,
        t: i64,
        suite: &Suite,
    ) -> Section {
        info!(
            "Charting package `{}` with {} benchmarks.",
            suite.pkg,
            suite.benchmarks.len()
        );

        let colors = ColorCursor::seed(&mut self.rng);
        let mut group = Section::new()
            .with_id(suite.pkg.clone())
            .add(ElementKind::Heading(format!("package {}", suite.pkg)));

        for metric in MetricKind::ALL {
            let datasets = suite
                .benchmarks
                .iter()
                .zip(colors)
                .map(|(bench, color)| {
                    let point = DataPoint::new(index, t, metric.value(bench));
                    Dataset::new(bench.name.clone(), point, color)
                })
                .collect();

            let chart = ChartHandle::new(Chart::new(metric, Rc::clone(labels), datasets));
            let key = ChartKey::new(&suite.pkg, metric);
            let canvas = Canvas::new(key.to_string(), chart.clone());

            group.push(ElementKind::Section(
                Section::new()
                    .with_class(CANVAS_WRAPPER_CLASS)
                    .add(ElementKind::Canvas(canvas)),
            ));
            registry.insert(key, chart);
        }

        group
            .add(ElementKind::Divider)
            .add(ElementKind::LineBreak)
    }
}

fn append_points(registry: &ChartRegistry, index: usize, t: i64, suite: &Suite) {
    for bench in &suite.benchmarks {
        for metric in MetricKind::ALL {
            let Some(chart) = registry.get(&suite.pkg, metric) else {
                continue;
            };

            let mut chart = chart.borrow_mut();
            match chart.dataset_mut(&bench.name) {
                Some(dataset) => {
                    dataset.push(DataPoint::new(index, t, metric.value(bench)));
                }
                None if metric == MetricKind::NsPerOp => warn!(
                    "Skipping `{}` of package `{}`: the benchmark was not reported when the package was first charted.",
                    bench.name, suite.pkg
                ),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use benchtrend_runs::Benchmark;
    use benchtrend_runs::LabelZone;
    use benchtrend_runs::Mem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::color::Color;
    use crate::layout::Element;

    struct StubFetcher(Result<&'static str, io::ErrorKind>);

    impl Fetch for StubFetcher {
        fn fetch(&self, _locator: &str) -> benchtrend_runs::error::Result<Vec<Run>> {
            match self.0 {
                Ok(json) => Ok(serde_json::from_str(json)?),
                Err(kind) => Err(io::Error::from(kind).into()),
            }
        }
    }

    fn builder(seed: u64) -> RunSeriesBuilder<StubFetcher, StdRng> {
        RunSeriesBuilder::new(StubFetcher(Ok("[]")), StdRng::seed_from_u64(seed))
            .with_labeler(Labeler::new(LabelZone::Utc))
    }

    fn bench(name: &str, value: f64) -> Benchmark {
        Benchmark {
            name: name.to_owned(),
            ns_per_op: value,
            mem: Mem {
                bytes_per_op: value * 10.0,
                allocs_per_op: value * 100.0,
            },
        }
    }

    fn suite(pkg: &str, benchmarks: Vec<Benchmark>) -> Suite {
        Suite {
            pkg: pkg.to_owned(),
            benchmarks,
        }
    }

    fn run(date: i64, suites: Vec<Suite>) -> Run {
        Run {
            date: date as f64,
            version: format!("{date:0>10}"),
            suites,
        }
    }

    fn ys(registry: &ChartRegistry, pkg: &str, metric: MetricKind, name: &str) -> Vec<f64> {
        let chart = registry.get(pkg, metric).unwrap().borrow();
        chart
            .dataset(name)
            .unwrap()
            .data()
            .iter()
            .map(|p| p.y)
            .collect()
    }

    fn group_ids(view: &View) -> Vec<&str> {
        view.elements()
            .iter()
            .filter_map(|e| match e {
                ElementKind::Section(s) => s.id(),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_dataset_has_one_point_per_run() {
        let runs = vec![
            run(100, vec![suite("a", vec![bench("A1", 1.0), bench("A2", 2.0)])]),
            run(200, vec![suite("a", vec![bench("A1", 1.5)]), suite("b", vec![bench("B1", 3.0)])]),
            run(300, vec![suite("b", vec![bench("B1", 3.5), bench("B2", 4.0)])]),
        ];
        let mut view = View::new();

        let registry = builder(1).chart_runs(&mut view, runs);

        assert_eq!(registry.len(), 6);
        for (_, _, chart) in registry.iter() {
            let chart = chart.borrow();
            assert_eq!(chart.labels().len(), 3);
            for dataset in chart.datasets() {
                assert_eq!(dataset.data().len(), 3, "dataset {}", dataset.label());
            }
        }
    }

    #[test]
    fn runs_are_processed_by_date() {
        let runs = vec![
            run(300, vec![suite("p", vec![bench("B", 3.0)])]),
            run(100, vec![suite("p", vec![bench("B", 1.0)])]),
            run(200, vec![suite("p", vec![bench("B", 2.0)])]),
        ];
        let mut view = View::new();

        let registry = builder(1).chart_runs(&mut view, runs);

        assert_eq!(ys(&registry, "p", MetricKind::NsPerOp, "B"), vec![1.0, 2.0, 3.0]);
        assert_eq!(ys(&registry, "p", MetricKind::BytesPerOp, "B"), vec![10.0, 20.0, 30.0]);
        assert_eq!(
            ys(&registry, "p", MetricKind::AllocsPerOp, "B"),
            vec![100.0, 200.0, 300.0]
        );

        let chart = registry.get("p", MetricKind::NsPerOp).unwrap().borrow();
        let ts: Vec<i64> = chart.datasets()[0].data().iter().map(|p| p.t).collect();
        assert_eq!(ts, vec![100_000, 200_000, 300_000]);
        assert_eq!(
            chart.labels(),
            ["0000000 (1/1)", "0000000 (1/1)", "0000000 (1/1)"]
        );
    }

    #[test]
    fn benchmark_added_later_is_not_charted() {
        let runs = vec![
            run(100, vec![suite("p", vec![bench("A", 1.0)])]),
            run(200, vec![suite("p", vec![bench("A", 2.0), bench("New", 5.0)])]),
        ];
        let mut view = View::new();

        let registry = builder(1).chart_runs(&mut view, runs);

        for metric in MetricKind::ALL {
            let chart = registry.get("p", metric).unwrap().borrow();
            let labels: Vec<&str> = chart.datasets().iter().map(|d| d.label()).collect();
            assert_eq!(labels, vec!["A"]);
        }
    }

    #[test]
    fn missing_benchmark_is_filled_at_its_run() {
        let foo_runs = [true, true, false, true, true];
        let runs = foo_runs
            .iter()
            .enumerate()
            .map(|(i, &has_foo)| {
                let value = (i + 1) as f64;
                let mut benchmarks = vec![bench("Bar", value)];
                if has_foo {
                    benchmarks.push(bench("Foo", value));
                }
                run(100 * (i as i64 + 1), vec![suite("p", benchmarks)])
            })
            .collect();
        let mut view = View::new();

        let registry = builder(1).chart_runs(&mut view, runs);

        for metric in MetricKind::ALL {
            let chart = registry.get("p", metric).unwrap().borrow();
            let foo = chart.dataset("Foo").unwrap().data();

            assert_eq!(foo.len(), 5);
            assert!(foo[2].y.is_nan());
            assert_eq!(foo[2].t, 300_000);
            assert!(foo.iter().enumerate().all(|(i, p)| i == 2 || !p.y.is_nan()));
        }
        assert_eq!(
            ys(&registry, "p", MetricKind::NsPerOp, "Bar"),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn package_first_seen_in_last_run_is_padded() {
        let runs = vec![
            run(100, vec![suite("a", vec![bench("A", 1.0)])]),
            run(200, vec![suite("a", vec![bench("A", 2.0)])]),
            run(300, vec![suite("a", vec![bench("A", 3.0)]), suite("late", vec![bench("L", 9.0)])]),
        ];
        let mut view = View::new();

        let registry = builder(1).chart_runs(&mut view, runs);

        let late = ys(&registry, "late", MetricKind::NsPerOp, "L");
        assert_eq!(late.len(), 3);
        assert!(late[0].is_nan());
        assert!(late[1].is_nan());
        assert_eq!(late[2], 9.0);
    }

    #[test]
    fn groups_follow_first_encounter_order() {
        let runs = vec![
            run(200, vec![suite("c", vec![bench("C", 1.0)]), suite("a", vec![bench("A", 1.0)])]),
            run(100, vec![suite("b", vec![bench("B", 1.0)])]),
            run(300, vec![suite("a", vec![bench("A", 1.0)]), suite("d", vec![bench("D", 1.0)])]),
        ];
        let mut view = View::new();

        builder(1).chart_runs(&mut view, runs);

        assert_eq!(group_ids(&view), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn group_holds_heading_charts_and_dividers() {
        let runs = vec![run(100, vec![suite("pkg", vec![bench("B", 1.0)])])];
        let mut view = View::new();

        builder(1).chart_runs(&mut view, runs);

        let [ElementKind::Section(group)] = view.elements() else {
            panic!("expected a single group");
        };
        let elements = group.elements();
        assert_eq!(elements.len(), 6);
        assert!(matches!(&elements[0], ElementKind::Heading(h) if h == "package pkg"));
        assert!(matches!(elements[4], ElementKind::Divider));
        assert!(matches!(elements[5], ElementKind::LineBreak));

        let canvas_ids: Vec<&str> = elements[1..4]
            .iter()
            .map(|e| match e {
                ElementKind::Section(wrapper) => {
                    assert_eq!(wrapper.class(), Some("canvaswrapper"));
                    match wrapper.elements() {
                        [ElementKind::Canvas(canvas)] => canvas.id().unwrap(),
                        _ => panic!("expected a canvas"),
                    }
                }
                _ => panic!("expected a canvas wrapper"),
            })
            .collect();
        assert_eq!(canvas_ids, vec!["pkg-ns/op", "pkg-bytes/op", "pkg-allocs/op"]);
    }

    #[test]
    fn same_seed_gives_same_colors() {
        let runs = || {
            vec![
                run(100, vec![suite("a", vec![bench("A1", 1.0), bench("A2", 1.0)])]),
                run(200, vec![suite("b", vec![bench("B1", 1.0), bench("B2", 1.0), bench("B3", 1.0)])]),
            ]
        };
        let colors = |registry: &ChartRegistry, pkg: &str, metric: MetricKind| -> Vec<Color> {
            let chart = registry.get(pkg, metric).unwrap().borrow();
            chart.datasets().iter().map(|d| d.color()).collect()
        };

        let first = builder(9).chart_runs(&mut View::new(), runs());
        let second = builder(9).chart_runs(&mut View::new(), runs());

        for pkg in ["a", "b"] {
            let ns_colors = colors(&first, pkg, MetricKind::NsPerOp);
            for metric in MetricKind::ALL {
                assert_eq!(colors(&first, pkg, metric), colors(&second, pkg, metric));
                assert_eq!(colors(&first, pkg, metric), ns_colors);
            }
        }
    }

    #[test]
    fn build_charts_fetched_runs() {
        let json = r#"[
            { "Date": 1614945600, "Version": "abcdef1234", "Suites": [
                { "Pkg": "github.com/acme/cache", "Benchmarks": [
                    { "Name": "BenchmarkGet", "NsPerOp": 120.5, "Mem": { "BytesPerOp": 64, "AllocsPerOp": 2 } }
                ] }
            ] }
        ]"#;
        let mut builder = RunSeriesBuilder::new(StubFetcher(Ok(json)), StdRng::seed_from_u64(1))
            .with_labeler(Labeler::new(LabelZone::Utc));
        let mut view = View::new();

        builder.build(&mut view, "benchmarks.json");

        assert_eq!(group_ids(&view), vec!["github.com/acme/cache"]);
    }

    #[test]
    fn failed_fetch_shows_single_error_text() {
        let mut builder = RunSeriesBuilder::new(
            StubFetcher(Err(io::ErrorKind::NotFound)),
            StdRng::seed_from_u64(1),
        );
        let mut view = View::new();

        builder.build(&mut view, "missing.json");

        let [ElementKind::Text(message)] = view.elements() else {
            panic!("expected a single text element");
        };
        assert!(message.starts_with("data load error:"));
    }

    #[test]
    fn invalid_document_shows_single_error_text() {
        let mut builder =
            RunSeriesBuilder::new(StubFetcher(Ok("{ not json")), StdRng::seed_from_u64(1));
        let mut view = View::new();

        builder.build(&mut view, "benchmarks.json");

        assert_eq!(view.elements().len(), 1);
        assert!(matches!(view.elements()[0], ElementKind::Text(_)));
    }
}
