//! Common test utilities for setup-sim integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Compatibility matrix used by the integration tests
pub const MATRIX_YAML: &str = r"
collections:
  - name: citadel
    packaging:
      configs: [focal, homebrew]
  - name: fortress
    packaging:
      configs: [focal, jammy, homebrew]
  - name: harmonic
    packaging:
      configs: [jammy, noble]
  - name: ionic
    packaging:
      configs: [noble]
  - name: jetty
    packaging:
      configs: [noble]
packaging_configs:
  - name: focal
    system:
      so: linux
      distribution: ubuntu
      version: focal
  - name: jammy
    system:
      so: linux
      distribution: ubuntu
      version: jammy
  - name: noble
    system:
      so: linux
      distribution: ubuntu
      version: noble
  - name: homebrew
    system:
      so: darwin
";

const ENV_VARS: &[&str] = &[
    "SETUP_SIM_CONFIG",
    "SETUP_SIM_MATRIX_URL",
    "SETUP_SIM_HOST_CODENAME",
    "SETUP_SIM_PLATFORM_DISTROS",
    "SETUP_SIM_BRIDGE_DISTROS",
    "RUST_LOG",
];

/// A temporary directory holding a matrix file and an empty config
pub struct TestEnv {
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let env = Self { temp };
        env.write_file("matrix.yaml", MATRIX_YAML);
        env.write_file("setup-sim.yaml", "{}\n");
        env
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.path().join("matrix.yaml")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("setup-sim.yaml")
    }

    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write file");
    }

    /// The binary with a clean environment, reading the local matrix
    pub fn cmd(&self) -> Command {
        let mut cmd = setup_sim_cmd();
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("XDG_CONFIG_HOME", self.path())
            .arg("--config")
            .arg(self.config_path())
            .arg("--matrix-file")
            .arg(self.matrix_path());
        cmd
    }

    /// Same as [`TestEnv::cmd`] with an Ubuntu host of the given codename
    pub fn ubuntu(&self, codename: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--host-family", "ubuntu", "--host-codename", codename]);
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn setup_sim_cmd() -> Command {
    Command::cargo_bin("setup-sim").expect("Failed to find setup-sim binary")
}
