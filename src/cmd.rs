use std::{path::PathBuf, process::{Command, Stdio}, sync::mpsc::{self, Receiver}, thread};

use crate::cmake::{CommandInvocation, CMAKE, GENERATOR};
use crate::error::ProcessFailure;

type ExecResult = Result<(), ProcessFailure>;

/// Runs the fixed configure invocation as a blocking child process.
pub struct ConfigureInvoker {
    program: String,
    current_dir: Option<PathBuf>,
}

impl ConfigureInvoker {
    pub fn new() -> Self {
        Self {
            program: CMAKE.to_owned(),
            current_dir: None,
        }
    }

    /// Replace the generator executable. The arguments are never affected.
    pub fn set_program<T>(mut self, program: T) -> Self
    where
        T: Into<String>, {
        self.program = program.into();
        self
    }

    /// Run the child here instead of the inherited working directory.
    pub fn set_current_dir<T>(mut self, dir: T) -> Self
    where
        T: Into<PathBuf>, {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn invocation(&self) -> CommandInvocation {
        CommandInvocation::with_program(self.program.clone())
    }

    pub fn run(&self) -> ExecResult {
        self.execute()
    }

    pub fn spawn(self) -> Receiver<ExecResult> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(self.execute());
        });

        rx
    }

    fn execute(&self) -> ExecResult {
        let invocation = self.invocation();
        let command = invocation.display();

        // the generator must be on PATH before anything is spawned
        let program = which::which(invocation.get_program()).map_err(|source| {
            ProcessFailure::NotFound { command: command.clone(), source }
        })?;

        tracing::info!("Configuring win-X86_64 Release build with {}", GENERATOR);
        tracing::debug!(program = %program.display(), "{}", command);

        let mut cmd = Command::new(&program);
        cmd.args(invocation.get_args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .map_err(|source| ProcessFailure::Spawn { command: command.clone(), source })?;

        if !status.success() {
            tracing::warn!("configure failed with {}", status);
            return Err(ProcessFailure::Exited { command, status });
        }

        Ok(())
    }
}

impl Default for ConfigureInvoker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invocation_is_cmake() {
        let invocation = ConfigureInvoker::default().invocation();
        assert_eq!(invocation, CommandInvocation::configure());
    }

    #[test]
    fn set_program_only_changes_program() {
        let invocation = ConfigureInvoker::new().set_program("cmake3").invocation();

        assert_eq!(invocation.get_program(), "cmake3");
        assert_eq!(invocation.get_args(), CommandInvocation::configure().get_args());
    }

    #[test]
    fn missing_generator_is_not_found() {
        let result = ConfigureInvoker::new()
            .set_program("configure-win64-no-such-generator")
            .run();

        let err = result.unwrap_err();
        assert!(matches!(err, ProcessFailure::NotFound { .. }));
        assert!(err.command().starts_with("configure-win64-no-such-generator .."));
    }

    #[cfg(unix)]
    mod stub {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::{Path, PathBuf};

        use tempfile::TempDir;

        use super::*;

        // Records each argument on its own line, then exits with `code`.
        fn write_stub(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
            let record = dir.join("args.txt");
            let stub = dir.join("cmake");
            let script = format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" >> '{}'\nexit {}\n",
                record.display(),
                code
            );
            fs::write(&stub, script).unwrap();
            fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
            (stub, record)
        }

        fn recorded(record: &Path) -> Vec<String> {
            fs::read_to_string(record)
                .unwrap()
                .lines()
                .map(str::to_owned)
                .collect()
        }

        #[test]
        fn run_passes_fixed_args() {
            let tmp = TempDir::new().unwrap();
            let (stub, record) = write_stub(tmp.path(), 0);

            ConfigureInvoker::new()
                .set_program(stub.to_str().unwrap())
                .run()
                .unwrap();

            assert_eq!(recorded(&record), CommandInvocation::configure().get_args());
        }

        #[test]
        fn run_reports_exit_status() {
            let tmp = TempDir::new().unwrap();
            let (stub, _) = write_stub(tmp.path(), 1);

            let err = ConfigureInvoker::new()
                .set_program(stub.to_str().unwrap())
                .run()
                .unwrap_err();

            assert!(matches!(err, ProcessFailure::Exited { .. }));
            assert_eq!(err.exit_code(), 1);
        }

        #[test]
        fn run_uses_current_dir() {
            let tmp = TempDir::new().unwrap();
            let build = tmp.path().join("build");
            fs::create_dir(&build).unwrap();

            let stub = tmp.path().join("cmake");
            fs::write(&stub, "#!/bin/sh\npwd > cwd.txt\n").unwrap();
            fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

            ConfigureInvoker::new()
                .set_program(stub.to_str().unwrap())
                .set_current_dir(&build)
                .run()
                .unwrap();

            assert!(build.join("cwd.txt").exists());
        }

        #[test]
        fn spawn_cmake() {
            let tmp = TempDir::new().unwrap();
            let (stub, record) = write_stub(tmp.path(), 0);

            let rx = ConfigureInvoker::new()
                .set_program(stub.to_str().unwrap())
                .spawn();

            let result = rx.recv().unwrap();
            assert!(result.is_ok());
            assert_eq!(recorded(&record).len(), 7);
        }
    }
}
