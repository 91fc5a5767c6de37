//! Plotly figure model
//!
//! Just enough of the Plotly JSON schema for the dashboard's three charts.
//! The page hands each serialized figure straight to `Plotly.newPlot`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Text(Vec<String>),
    Number(Vec<f64>),
}

impl From<Vec<String>> for AxisValues {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

impl From<Vec<f64>> for AxisValues {
    fn from(values: Vec<f64>) -> Self {
        Self::Number(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub x: AxisValues,
    pub y: AxisValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<AxisValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(trace_type: TraceType, x: impl Into<AxisValues>, y: impl Into<AxisValues>) -> Self {
        Self {
            trace_type,
            x: x.into(),
            y: y.into(),
            mode: None,
            name: None,
            text: None,
            textposition: None,
            marker: None,
        }
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn text(mut self, text: impl Into<AxisValues>, position: &str) -> Self {
        self.text = Some(text.into());
        self.textposition = Some(position.to_string());
        self
    }

    pub fn marker_size(mut self, size: u32) -> Self {
        self.marker = Some(Marker { size });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

impl Layout {
    pub fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        let title_of = |text: &str| Title {
            text: text.to_string(),
        };
        Self {
            title: title_of(title),
            xaxis: Axis {
                title: title_of(x_title),
            },
            yaxis: Axis {
                title: title_of(y_title),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}
