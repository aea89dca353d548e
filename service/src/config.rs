use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

/// Timing of the event streams served to every client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamSettings {
    /// Delay between two ticks of any one source.
    pub tick_interval: Duration,
    /// One-time delay before the reverse echo source starts ticking, so that
    /// it does not tick in phase with the echo source it is merged with.
    pub reverse_echo_offset: Duration,
    /// Interval of SSE keep-alive comments on idle connections.
    pub keep_alive_interval: Duration,
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Milliseconds between two events of the same stream
    #[arg(long, env, default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_interval_ms: u64,

    /// Milliseconds the reverse echo stream waits before its first tick
    #[arg(long, env, default_value_t = 1000)]
    pub reverse_echo_offset_ms: u64,

    /// Seconds between keep-alive comments sent on idle SSE connections
    #[arg(long, env, default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..))]
    pub keep_alive_interval_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Builds a Config from explicit arguments instead of the process command
    /// line. The first item is the program name.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn stream_settings(&self) -> StreamSettings {
        StreamSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            reverse_echo_offset: Duration::from_millis(self.reverse_echo_offset_ms),
            keep_alive_interval: Duration::from_secs(self.keep_alive_interval_secs),
        }
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_settings_defaults_tick_once_per_second() {
        let config = Config::from_args(["echo_stream_rs"]).unwrap();
        let settings = config.stream_settings();

        assert_eq!(settings.tick_interval, Duration::from_secs(1));
        assert_eq!(settings.reverse_echo_offset, Duration::from_secs(1));
        assert_eq!(settings.keep_alive_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_stream_settings_follow_arguments() {
        let config = Config::from_args([
            "echo_stream_rs",
            "--tick-interval-ms",
            "250",
            "--reverse-echo-offset-ms",
            "0",
        ])
        .unwrap();
        let settings = config.stream_settings();

        assert_eq!(settings.tick_interval, Duration::from_millis(250));
        assert_eq!(settings.reverse_echo_offset, Duration::ZERO);
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        assert!(Config::from_args(["echo_stream_rs", "--tick-interval-ms", "0"]).is_err());
    }

    #[test]
    fn test_runtime_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert_eq!("qa".parse::<RustEnv>(), Err(RustEnvParseError));
    }

    #[test]
    fn test_allowed_origins_split_on_commas() {
        let config = Config::from_args([
            "echo_stream_rs",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            config.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
