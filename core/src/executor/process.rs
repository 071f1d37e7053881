use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::{ExecutionError, ProcessExecutor};

/// Spawns the command as a child process.
///
/// stdin is closed, stdout and stderr are captured. stdout is only traced,
/// stderr ends up in [`ExecutionError::Failed`]. The child is killed when
/// the timeout elapses or when the returned future is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubprocessExecutor;

impl SubprocessExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessExecutor for SubprocessExecutor {
    async fn execute(&self, args: &[String], timeout: Duration) -> Result<(), ExecutionError> {
        let (program, rest) = args.split_first().ok_or(ExecutionError::EmptyCommand)?;

        debug!("Executing: {}", args.join(" "));

        let child = Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecutionError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Dropping `wait_with_output` on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ExecutionError::Wait {
                program: program.clone(),
                source,
            })?,
            Err(_) => {
                warn!("{program} did not finish within {}s, killed", timeout.as_secs_f64());
                return Err(ExecutionError::Timeout {
                    program: program.clone(),
                    timeout,
                });
            }
        };

        trace!("{program} stdout: {}", String::from_utf8_lossy(&output.stdout).trim_end());

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{program} exited with {}", output.status);
            return Err(ExecutionError::Failed {
                program: program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        debug!("{program} finished successfully");
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
