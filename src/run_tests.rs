//! Tests for the run module.

use tempfile::TempDir;

use super::*;
use webhook_action::settings::{MethodCode, RequestMethod};

fn cli_for(dir: &TempDir, args: &[&str]) -> Cli {
    let path = dir.path().join("settings.json");
    let mut argv = vec!["webhook-action"];
    argv.extend_from_slice(args);
    argv.push("--settings");
    argv.push(path.to_str().unwrap());
    Cli::parse_from_iter(argv)
}

fn stored(dir: &TempDir) -> LoadResult {
    FileSettingsStore::new(dir.path().join("settings.json")).load()
}

fn same_code(a: ExitCode, b: ExitCode) -> bool {
    format!("{a:?}") == format!("{b:?}")
}

mod run_error {
    use super::*;

    #[test]
    fn settings_exist_displays_path() {
        let error = RunError::SettingsExist {
            path: PathBuf::from("/tmp/s.json"),
        };
        assert!(error.to_string().contains("/tmp/s.json"));
    }

    #[test]
    fn settings_errors_are_configuration_exit_codes() {
        let error = RunError::CorruptedSettings {
            path: PathBuf::from("s.json"),
            reason: "bad".to_string(),
        };
        assert!(same_code(error.exit_code(), exit_code::CONFIG_ERROR));
    }

    #[test]
    fn configuration_dispatch_error_is_configuration_exit_code() {
        let error = RunError::Dispatch(DispatchError::from(
            webhook_action::settings::ConfigurationError::UnsupportedMethod(9),
        ));
        assert!(same_code(error.exit_code(), exit_code::CONFIG_ERROR));
    }

    #[test]
    fn transport_dispatch_error_is_runtime_exit_code() {
        let error = RunError::Dispatch(DispatchError::from(
            webhook_action::webhook::HttpError::Timeout,
        ));
        assert!(same_code(error.exit_code(), exit_code::runtime_error()));
    }
}

mod init_command {
    use super::*;

    #[tokio::test]
    async fn writes_default_settings() {
        let dir = TempDir::new().unwrap();

        execute(cli_for(&dir, &["init"])).await.unwrap();

        assert_eq!(stored(&dir).into_settings(), Settings::default());
    }

    #[tokio::test]
    async fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        execute(cli_for(&dir, &["set", "--url", "https://keep.test"]))
            .await
            .unwrap();

        let result = execute(cli_for(&dir, &["init"])).await;

        assert!(matches!(result, Err(RunError::SettingsExist { .. })));
        assert_eq!(stored(&dir).into_settings().url, "https://keep.test");
    }

    #[tokio::test]
    async fn force_overwrites_existing_settings() {
        let dir = TempDir::new().unwrap();
        execute(cli_for(&dir, &["set", "--url", "https://old.test"]))
            .await
            .unwrap();

        execute(cli_for(&dir, &["init", "--force"])).await.unwrap();

        assert_eq!(stored(&dir).into_settings(), Settings::default());
    }
}

mod set_command {
    use super::*;

    #[tokio::test]
    async fn creates_document_with_given_fields() {
        let dir = TempDir::new().unwrap();

        execute(cli_for(
            &dir,
            &["set", "--url", "https://example.com/hook", "--method", "PUT"],
        ))
        .await
        .unwrap();

        let settings = stored(&dir).into_settings();
        assert_eq!(settings.url, "https://example.com/hook");
        assert_eq!(settings.method, RequestMethod::Put.code());
        assert_eq!(settings.body, "{}");
    }

    #[tokio::test]
    async fn keeps_fields_not_given() {
        let dir = TempDir::new().unwrap();
        execute(cli_for(&dir, &["set", "--url", "https://a.test", "--body", "x"]))
            .await
            .unwrap();

        execute(cli_for(&dir, &["set", "--content-type", "text/plain"]))
            .await
            .unwrap();

        let settings = stored(&dir).into_settings();
        assert_eq!(settings.url, "https://a.test");
        assert_eq!(settings.body, "x");
        assert_eq!(settings.content_type, "text/plain");
    }

    #[tokio::test]
    async fn refuses_to_edit_corrupted_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{{{").unwrap();

        let result = execute(cli_for(&dir, &["set", "--url", "https://a.test"])).await;

        assert!(matches!(result, Err(RunError::CorruptedSettings { .. })));
    }
}

mod show_command {
    use super::*;

    #[tokio::test]
    async fn succeeds_without_stored_settings() {
        let dir = TempDir::new().unwrap();

        execute(cli_for(&dir, &["show"])).await.unwrap();

        assert!(matches!(stored(&dir), LoadResult::NotFound));
    }

    #[tokio::test]
    async fn reports_corrupted_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "nope").unwrap();

        let result = execute(cli_for(&dir, &["show"])).await;

        assert!(matches!(result, Err(RunError::CorruptedSettings { .. })));
    }
}

mod fire_command {
    use super::*;

    #[tokio::test]
    async fn missing_url_fails_without_network() {
        let dir = TempDir::new().unwrap();

        let result = execute(cli_for(&dir, &["fire"])).await;

        match result {
            Err(RunError::Dispatch(e)) => assert!(e.is_missing_url()),
            other => panic!("Expected dispatch error, got {other:?}"),
        }
        // First run stores the defaults.
        assert_eq!(stored(&dir).into_settings(), Settings::default());
    }

    #[tokio::test]
    async fn unsupported_method_fails_as_configuration_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"url":"http://127.0.0.1:9/","method":99}"#,
        )
        .unwrap();

        let result = execute(cli_for(&dir, &["fire"])).await;

        match result {
            Err(RunError::Dispatch(e)) => assert_eq!(e.kind(), ErrorKind::Configuration),
            other => panic!("Expected dispatch error, got {other:?}"),
        }
        assert_eq!(stored(&dir).into_settings().method, MethodCode(99));
    }

    #[tokio::test]
    async fn corrupted_document_is_refused_and_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let original = r#"{"url":"https://example.com/hook","method":"POST","body":"keep me"}"#;
        std::fs::write(&path, original).unwrap();

        let result = execute(cli_for(&dir, &["fire"])).await;

        match result {
            Err(e @ RunError::CorruptedSettings { .. }) => {
                assert!(same_code(e.exit_code(), exit_code::CONFIG_ERROR));
            }
            other => panic!("Expected corrupted settings error, got {other:?}"),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
