//! Configuration validation (std only).

use heapless::String;

use crate::error::{ConfigError, Error, Result};
use crate::pattern::DelayPlan;

use super::pattern::PatternConfig;
use super::system::PlotterConfig;

/// Validate a plotter configuration.
///
/// Checks:
/// - Homing half-period and offset delay are non-zero
/// - Every pattern has at least one segment
/// - Every segment has at least one delta entry
/// - No pattern declares a zero step delay
pub fn validate_config(config: &PlotterConfig) -> Result<()> {
    if config.homing.half_period_ticks == 0 {
        return Err(Error::Config(ConfigError::ZeroHalfPeriod));
    }

    if config.homing.offset_delay_ticks == 0 {
        return Err(Error::Config(ConfigError::ZeroOffsetDelay));
    }

    for (name, pattern) in config.patterns.iter() {
        validate_pattern(name.as_str(), pattern)?;
    }

    Ok(())
}

fn validate_pattern(name: &str, pattern: &PatternConfig) -> Result<()> {
    let tag = || -> String<32> { String::try_from(name).unwrap_or_default() };

    if pattern.segments.is_empty() {
        return Err(Error::Config(ConfigError::EmptyPattern(tag())));
    }

    for segment in &pattern.segments {
        if segment.dy.is_empty() {
            return Err(Error::Config(ConfigError::EmptySegment(tag())));
        }
    }

    let zero_delay = match pattern.delay {
        DelayPlan::Uniform(ticks) => ticks == 0,
        DelayPlan::ByAxis { y_only, x_move } => y_only == 0 || x_move == 0,
    };
    if zero_delay {
        return Err(Error::Config(ConfigError::ZeroDelay(tag())));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> PlotterConfig {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        let config = parse(
            r#"
[patterns.ok]
delay = { uniform = 200 }
segments = [{ dx = 1, dy = [1] }]
"#,
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let config = parse(
            r#"
[patterns.hollow]
delay = { uniform = 200 }
segments = []
"#,
        );
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::EmptyPattern(_)))
        ));
    }

    #[test]
    fn test_empty_segment_rejected() {
        let config = parse(
            r#"
[patterns.gappy]
delay = { uniform = 200 }
segments = [{ dx = 1, dy = [] }]
"#,
        );
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::EmptySegment(_)))
        ));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = parse(
            r#"
[patterns.stalled]
delay = { by_axis = { y_only = 0, x_move = 1000 } }
segments = [{ dx = 1, dy = [1] }]
"#,
        );
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::ZeroDelay(_)))
        ));
    }

    #[test]
    fn test_zero_half_period_rejected() {
        let config = parse(
            r#"
[homing]
half_period_ticks = 0
"#,
        );
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::ZeroHalfPeriod))
        ));
    }
}
