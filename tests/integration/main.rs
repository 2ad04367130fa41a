//! Integration tests for proxyconf

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn proxyconf() -> Command {
        cargo_bin_cmd!("proxyconf")
    }

    /// Write a settings file pointing both managers at the given programs
    fn write_config(dir: &Path, npm: &str, yarn: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            format!(
                "[commands]\nnpm = \"{}\"\nyarn = \"{}\"\n\n[detection]\nmarkers = [\"yarn.lock\"]\n",
                npm, yarn
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn help_displays() {
        proxyconf()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("proxy and TLS"));
    }

    #[test]
    fn version_displays() {
        proxyconf()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("proxyconf"));
    }

    #[test]
    fn detect_yarn_project() {
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join("yarn.lock"), "").unwrap();
        let nested = project.path().join("packages").join("web");
        std::fs::create_dir_all(&nested).unwrap();

        proxyconf()
            .arg("detect")
            .arg("-C")
            .arg(&nested)
            .assert()
            .success()
            .stdout("yarn\n");
    }

    #[test]
    fn detect_from_relative_dir_walks_to_project_root() {
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join("yarn.lock"), "").unwrap();
        let nested = project.path().join("packages").join("app");
        std::fs::create_dir_all(&nested).unwrap();

        proxyconf()
            .current_dir(&nested)
            .args(["detect", "-C", "."])
            .assert()
            .success()
            .stdout("yarn\n");
    }

    #[test]
    fn resolve_without_package_manager_is_empty() {
        let project = TempDir::new().unwrap();
        let config = write_config(
            project.path(),
            "proxyconf-missing-npm",
            "proxyconf-missing-yarn",
        );

        let output = proxyconf()
            .arg("--config")
            .arg(&config)
            .args(["resolve", "--format", "json", "-C"])
            .arg(project.path())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "noProxy": [], "strictSSL": false })
        );
    }

    #[test]
    fn get_unset_prints_nothing() {
        let project = TempDir::new().unwrap();
        let config = write_config(
            project.path(),
            "proxyconf-missing-npm",
            "proxyconf-missing-yarn",
        );

        proxyconf()
            .arg("--config")
            .arg(&config)
            .args(["get", "proxy", "-C"])
            .arg(project.path())
            .assert()
            .success()
            .stdout("");
    }

    #[cfg(unix)]
    #[test]
    fn resolve_with_fake_npm() {
        use std::os::unix::fs::PermissionsExt;

        let project = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let npm = bin.path().join("npm");
        std::fs::write(
            &npm,
            r#"#!/bin/sh
case "$3" in
  https-proxy) echo "http://proxy:8080" ;;
  noproxy) echo "localhost,127.0.0.1" ;;
  strict-ssl) echo "true" ;;
  cafile) echo "bundle.pem" ;;
  *) echo "undefined" ;;
esac
"#,
        )
        .unwrap();
        std::fs::set_permissions(&npm, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(
            project.path().join("bundle.pem"),
            "-----BEGIN CERTIFICATE-----\nAAA\n-----END CERTIFICATE-----\n",
        )
        .unwrap();
        let config = write_config(
            bin.path(),
            &npm.display().to_string(),
            "proxyconf-missing-yarn",
        );

        let output = proxyconf()
            .arg("--config")
            .arg(&config)
            .args(["resolve", "--format", "json", "-C"])
            .arg(project.path())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "proxy": "http://proxy:8080",
                "noProxy": ["localhost", "127.0.0.1"],
                "strictSSL": true,
                "ca": ["-----BEGIN CERTIFICATE-----\\nAAA\\n-----END CERTIFICATE-----"],
            })
        );
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "init"])
            .assert()
            .success();

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[commands]"));
    }

    #[test]
    fn config_set_persists_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "set", "commands.yarn", "/opt/yarn/bin/yarn"])
            .assert()
            .success();

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/opt/yarn/bin/yarn"));

        proxyconf()
            .arg("--config")
            .arg(&path)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn invalid_config_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[commands\n").unwrap();

        proxyconf()
            .arg("--config")
            .arg(&path)
            .arg("detect")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"))
            .stderr(predicate::str::contains("config init --force"));
    }
}
