/// The measured operation type, spelled exactly the way reports spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
    #[strum(serialize = "WebSocket")]
    WebSocket,
}

impl Method {
    /// Flattening order for everything derived from a report.
    pub const ALL: [Method; 3] = [Method::Get, Method::Post, Method::WebSocket];

    /// The methods shown in the HTTP comparison chart.
    pub const HTTP: [Method; 2] = [Method::Get, Method::Post];
}

/// One measurement extracted from a report line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Requests or messages per second.
    pub value: f64,
    /// Configuration label active when the sample was recorded; empty when
    /// no section header preceded it.
    pub config: String,
}

/// Samples for one method, in encounter order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MethodSeries {
    samples: Vec<Sample>,
}

impl MethodSeries {
    pub(crate) fn push(&mut self, value: f64, config: &str) {
        self.samples.push(Sample {
            value,
            config: config.to_string(),
        });
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> {
        self.samples.iter().map(|s| s.value)
    }

    pub fn configs(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|s| s.config.as_str())
    }

    /// Arithmetic mean over all samples; `None` when the series is empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        mean(self.values())
    }

    /// Arithmetic mean over samples whose configuration label contains
    /// `config_part`; `None` when no sample matches.
    #[must_use]
    pub fn mean_matching(&self, config_part: &str) -> Option<f64> {
        mean(
            self.samples
                .iter()
                .filter(|s| s.config.contains(config_part))
                .map(|s| s.value),
        )
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0u64;
    for v in values {
        sum += v;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

/// Everything extracted from one report: an ordered sample series per
/// method. Built by a single forward scan, then consumed read-only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    get: MethodSeries,
    post: MethodSeries,
    web_socket: MethodSeries,
}

impl Report {
    #[must_use]
    pub fn series(&self, method: Method) -> &MethodSeries {
        match method {
            Method::Get => &self.get,
            Method::Post => &self.post,
            Method::WebSocket => &self.web_socket,
        }
    }

    pub(crate) fn series_mut(&mut self, method: Method) -> &mut MethodSeries {
        match method {
            Method::Get => &mut self.get,
            Method::Post => &mut self.post,
            Method::WebSocket => &mut self.web_socket,
        }
    }

    /// All samples in method order (GET, POST, WebSocket), encounter order
    /// within each method.
    pub fn iter(&self) -> impl Iterator<Item = (Method, &Sample)> {
        Method::ALL
            .into_iter()
            .flat_map(|m| self.series(m).samples().iter().map(move |s| (m, s)))
    }

    #[must_use]
    pub fn total_samples(&self) -> usize {
        Method::ALL.into_iter().map(|m| self.series(m).len()).sum()
    }
}
