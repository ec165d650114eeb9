// used to layer the settings file under the environment
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// our own stuff that we need
use crate::domain::{Domain, TEXT_PROBE};
use crate::error::{IntervalError, Result};
use crate::interval::{Interval, Options};
use crate::parser::Bounds;

/// Library wide knobs, read from an optional file and from environment
/// variables prefixed `INTERVALS_`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Strict construction refuses `(v, v)`, permissive construction turns
    /// it into the empty interval `[v, v)`.
    pub strict: bool,
    /// The order in which text bounds are tried when guessing a domain.
    pub text_probe: Vec<Domain>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: true,
            text_probe: TEXT_PROBE.to_vec(),
            log_filter: "warn".into(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix("INTERVALS")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("text_probe"),
            )
            .build()
            .inspect_err(|e| warn!(?path, error = %e, "could not read the settings"))?;
        let settings: Settings = config.try_deserialize()?;
        if settings.text_probe.is_empty() {
            return Err(IntervalError::Config("text_probe must name at least one domain".into()));
        }
        debug!(strict = settings.strict, probe = ?settings.text_probe, "loaded settings");
        Ok(settings)
    }

    pub fn options(&self) -> Options {
        Options::new().permissive(!self.strict)
    }

    /// Builds an interval of a known domain under these settings.
    pub fn interval(&self, domain: Domain, bounds: impl Into<Bounds>) -> Result<Interval> {
        Interval::with_options(domain, bounds, self.options())
    }

    /// Guesses the domain using the configured text probe.
    pub fn guess(&self, bounds: impl Into<Bounds>) -> Result<Interval> {
        Interval::build_probing(None, bounds.into(), self.options(), &self.text_probe)
    }

    /// Installs a global fmt subscriber. A second call leaves the first
    /// subscriber in place.
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .map_err(|e| IntervalError::Config(format!("invalid log filter '{}': {}", self.log_filter, e)))?;
        if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
            debug!("a global subscriber is already installed");
        }
        Ok(())
    }
}
