use clap::ValueEnum;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors
    Error,
    /// Warnings about the input, such as invalid patterns or duplicate fragments
    #[default]
    Warn,
    /// Info, warning and error messages
    Info,
    /// Every decision taken for every operation
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "graphql_typescript_swr=error,swrgen=error,off",
            LogLevel::Warn => "graphql_typescript_swr=warn,swrgen=warn,off",
            LogLevel::Info => "graphql_typescript_swr=info,swrgen=info,off",
            LogLevel::Debug => "graphql_typescript_swr=debug,swrgen=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}
