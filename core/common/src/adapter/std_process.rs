//! 標準サブプロセス実行（std::process::Command を委譲）

use crate::error::Error;
use crate::ports::outbound::{Process, ProcessOutput};
use std::path::Path;

/// 標準ライブラリの Command を使う Process 実装
#[derive(Debug, Clone, Default)]
pub struct StdProcess;

impl Process for StdProcess {
    fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error> {
        let status = std::process::Command::new(program)
            .args(args)
            .status()
            .map_err(|e| {
                Error::system(format!("Failed to execute '{}': {}", program.display(), e))
            })?;
        Ok(status.code().unwrap_or(1))
    }

    fn output(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, Error> {
        let out = std::process::Command::new(program)
            .args(args)
            .output()
            .map_err(|e| {
                Error::system(format!("Failed to execute '{}': {}", program.display(), e))
            })?;
        Ok(ProcessOutput {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}
