use super::*;

#[test]
fn defaults_resolve_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(settings.database.url.is_none());
    assert_eq!(settings.database.max_connections.get(), 8);
    assert!(settings.admin.submission_delay.is_zero());
    assert_eq!(settings.export.csv_quoting, CsvQuoting::Verbatim);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());
    raw.admin.submission_delay_ms = Some(2000);

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        admin_submission_delay_ms: Some(0),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(settings.admin.submission_delay.is_zero());
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn blank_database_url_is_treated_as_missing() {
    let mut raw = RawSettings::default();
    raw.database.url = Some("   ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(settings.database.url.is_none());
}

#[test]
fn zero_pool_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.database.max_connections = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero pool must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "database.max_connections",
            ..
        }
    ));
}

#[test]
fn unknown_csv_quoting_is_rejected() {
    let mut raw = RawSettings::default();
    raw.export.csv_quoting = Some("excel".to_string());

    let err = Settings::from_raw(raw).expect_err("unknown quoting must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "export.csv_quoting",
            ..
        }
    ));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["postdesk"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_export_arguments() {
    let args = CliArgs::parse_from([
        "postdesk",
        "export",
        "--database-url",
        "postgres://example",
        "--csv-quoting",
        "quoted",
        "hello-world",
        "--output",
        "hello.csv",
    ]);

    match args.command.expect("export command") {
        Command::Export(export) => {
            assert_eq!(export.slug, "hello-world");
            assert_eq!(
                export.output.as_deref(),
                Some(std::path::Path::new("hello.csv"))
            );

            let mut raw = RawSettings::default();
            raw.apply_export_overrides(&export);
            let settings = Settings::from_raw(raw).expect("valid settings");
            assert_eq!(
                settings.database.url.as_deref(),
                Some("postgres://example")
            );
            assert_eq!(settings.export.csv_quoting, CsvQuoting::Quoted);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "postdesk",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--server-port",
        "8080",
        "--log-json",
        "true",
        "--export-csv-quoting",
        "quoted",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            let overrides = &serve.overrides;
            assert_eq!(overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(overrides.server_port, Some(8080));
            assert_eq!(overrides.log_json, Some(true));
            assert_eq!(overrides.export_csv_quoting.as_deref(), Some("quoted"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
