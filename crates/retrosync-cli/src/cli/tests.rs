use super::Cli;
use clap::Parser;

#[test]
fn parses_short_flags() {
    let cli = Cli::try_parse_from(["retrosync", "-c", "-v", "-d"]).unwrap();
    assert!(cli.cores);
    assert!(!cli.assets);
    assert!(cli.verbose);
    assert!(cli.dry);
}

#[test]
fn parses_long_flags() {
    let cli = Cli::try_parse_from(["retrosync", "--assets", "--config", "/opt/ra.cfg"]).unwrap();
    assert!(cli.assets);
    assert!(!cli.cores);
    assert_eq!(cli.config.as_deref(), Some("/opt/ra.cfg"));
}

#[test]
fn config_short_flag_is_g() {
    let cli = Cli::try_parse_from(["retrosync", "-s", "-g", "/opt/ra.cfg"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some("/opt/ra.cfg"));
}

#[test]
fn all_implies_both_modes() {
    let mut cli = Cli::try_parse_from(["retrosync", "-a"]).unwrap();
    cli.apply_all();
    assert!(cli.cores);
    assert!(cli.assets);
}

#[test]
fn no_flags_parses_but_selects_nothing() {
    let mut cli = Cli::try_parse_from(["retrosync"]).unwrap();
    cli.apply_all();
    assert!(!cli.cores);
    assert!(!cli.assets);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["retrosync", "--resume"]).is_err());
}
