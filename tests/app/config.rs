use clap::Parser;
use volume_focus::config::{Cli, Config, ConfigError, DEFAULT_MAX};

#[test]
fn defaults_to_a_ceiling_of_ten() {
    let cli = Cli::parse_from(["volume-focus"]);
    assert_eq!(cli.max, DEFAULT_MAX);
    assert_eq!(cli.log_level, "warn");
    assert_eq!(Config::try_from(&cli), Ok(Config { max: 10 }));
}

#[test]
fn accepts_a_custom_ceiling() {
    let cli = Cli::parse_from(["volume-focus", "--max", "20"]);
    assert_eq!(Config::try_from(&cli), Ok(Config { max: 20 }));
}

#[test]
fn rejects_out_of_range_ceilings() {
    assert_eq!(Config::new(0), Err(ConfigError::ZeroMax));
    assert_eq!(Config::new(101), Err(ConfigError::MaxTooLarge(101)));
    assert_eq!(
        ConfigError::MaxTooLarge(101).to_string(),
        "volume ceiling 101 exceeds the limit of 100"
    );
}
