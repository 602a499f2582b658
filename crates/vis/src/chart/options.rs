use serde::Serialize;

use crate::metric::MetricKind;

#[derive(Serialize, Debug, Clone)]
pub(crate) struct Options {
    responsive: bool,
    title: Title,
    tooltips: Interaction,
    hover: Interaction,
    scales: Scales,
}

impl Options {
    pub fn new(metric: MetricKind) -> Self {
        Self {
            responsive: true,
            title: Title::new(metric.name()),
            tooltips: Interaction {
                mode: InteractionMode::Index,
                intersect: false,
            },
            hover: Interaction {
                mode: InteractionMode::Nearest,
                intersect: true,
            },
            scales: Scales {
                y_axes: vec![Axis::new(metric.name())],
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
struct Title {
    display: bool,
    text: &'static str,
}

impl Title {
    fn new(text: &'static str) -> Self {
        Self {
            display: true,
            text,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
struct Interaction {
    mode: InteractionMode,
    intersect: bool,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum InteractionMode {
    Index,
    Nearest,
}

#[derive(Serialize, Debug, Clone)]
struct Scales {
    #[serde(rename = "yAxes")]
    y_axes: Vec<Axis>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Axis {
    display: bool,
    scale_label: ScaleLabel,
    ticks: Ticks,
}

impl Axis {
    fn new(label: &'static str) -> Self {
        Self {
            display: true,
            scale_label: ScaleLabel {
                display: true,
                label_string: label,
            },
            ticks: Ticks {
                begin_at_zero: true,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct ScaleLabel {
    display: bool,
    label_string: &'static str,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Ticks {
    begin_at_zero: bool,
}
