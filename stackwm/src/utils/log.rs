use anyhow::Result;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build a filter from `RUST_LOG` style directives. Unparsable directives
/// fall back to `info` and the parse error is handed back.
pub fn parse_log_level(directives: &str) -> (EnvFilter, Option<ParseError>) {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match builder.parse(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(""),
            Some(err),
        ),
    }
}

/// Install the global subscriber. Without explicit directives `RUST_LOG` is
/// used, defaulting to `info`.
///
/// # Errors
///
/// Will error if a global subscriber has already been set.
pub fn setup_logging(directives: Option<&str>) -> Result<()> {
    let filter = match directives {
        Some(directives) => {
            let (filter, err) = parse_log_level(directives);
            if let Some(err) = err {
                eprintln!("Invalid log directives {directives:?}: {err}");
            }
            filter
        }
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    };
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directives_should_parse() {
        let (filter, err) = parse_log_level("stackwm_core=trace,warn");
        assert!(err.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_directives_should_fall_back_to_info() {
        let (filter, err) = parse_log_level("stackwm_core=loud");
        assert!(err.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
