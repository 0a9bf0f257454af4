use clap::Parser;
use octoview::cli::Cli;
use std::path::PathBuf;

#[test]
fn no_args_starts_on_search_view() {
    let cli = Cli::try_parse_from(["octoview"]).expect("expected parse");
    assert!(cli.username.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn positional_username_opens_profile_view() {
    let cli = Cli::try_parse_from(["octoview", "octocat"]).expect("expected parse");
    assert_eq!(cli.username.as_deref(), Some("octocat"));
}

#[test]
fn config_flag_overrides_path() {
    let cli = Cli::try_parse_from(["octoview", "--config", "/tmp/alt.toml"]).expect("expected parse");
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/alt.toml")));
}

#[test]
fn username_and_config_combine() {
    let cli = Cli::try_parse_from(["octoview", "octocat", "--config", "/tmp/alt.toml"])
        .expect("expected parse");
    assert_eq!(cli.username.as_deref(), Some("octocat"));
    assert!(cli.config.is_some());
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["octoview", "--nope"]).is_err());
}
