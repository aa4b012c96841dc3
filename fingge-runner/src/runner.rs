use crate::config::RunnerConfig;
use crate::error::RunError;
use shared_types::ExecutionResult;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const TRUNCATION_MARKER: &str = "\n[output truncated]\n";

/// Runs submitted code in an interpreter subprocess.
///
/// Every run gets its own temp directory, removed when the run ends however
/// it ends. The interpreter leads its own process group; the group is killed
/// when the interpreter exits or its timeout expires, so background processes
/// never outlive the run. At most `max_concurrent` runs exist at once.
///
/// There is no sandbox beyond a cleared environment and a private working
/// directory: the child has the same privileges as the server.
#[derive(Clone)]
pub struct CodeRunner {
    config: Arc<RunnerConfig>,
    permits: Arc<Semaphore>,
}

impl CodeRunner {
    pub fn new(config: RunnerConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        Self {
            config: Arc::new(config),
            permits,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run `code` and report how it went. Never fails: infrastructure
    /// problems come back as an `Error`-kind result.
    pub async fn run(&self, code: &str, timeout_secs: Option<u64>) -> ExecutionResult {
        let run_id = Uuid::new_v4();
        let timeout_secs = self.config.effective_timeout(timeout_secs);

        info!(
            run_id = %run_id,
            interpreter = %self.config.interpreter,
            code_len = code.len(),
            timeout_secs,
            "Executing submitted code"
        );

        match self.execute(code, timeout_secs).await {
            Ok(result) => {
                info!(
                    run_id = %run_id,
                    kind = ?result.kind,
                    exit_code = ?result.exit_code,
                    duration_ms = result.duration_ms,
                    stdout_len = result.output.len(),
                    "Execution finished"
                );
                result
            }
            Err(e) => {
                error!(run_id = %run_id, error = %e, "Execution failed");
                ExecutionResult::error(e)
            }
        }
    }

    async fn execute(&self, code: &str, timeout_secs: u64) -> Result<ExecutionResult, RunError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| RunError::Closed)?;

        // Dropped on every return path below, which deletes the directory.
        let workdir = self.create_workdir()?;
        let script = workdir
            .path()
            .join(format!("main.{}", self.config.file_extension));
        tokio::fs::write(&script, code)
            .await
            .map_err(RunError::WriteSource)?;
        debug!("Wrote source to {}", script.display());

        let mut command = Command::new(&self.config.interpreter);
        command
            .args(&self.config.args)
            .arg(&script)
            .current_dir(workdir.path())
            .env_clear()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(path) = std::env::var_os("PATH") {
            command.env("PATH", path);
        }
        for name in &self.config.pass_env {
            if let Some(value) = std::env::var_os(name) {
                command.env(name, value);
            }
        }

        #[cfg(unix)]
        command.process_group(0);

        let started = Instant::now();
        let mut child = command.spawn().map_err(|source| RunError::Spawn {
            program: self.config.interpreter.clone(),
            source,
        })?;
        let group = ProcessGroup::of(&child);

        let limit = self.config.max_output_bytes;
        let stdout_task = tokio::spawn(read_capped(child.stdout.take(), limit));
        let stderr_task = tokio::spawn(read_capped(child.stderr.take(), limit));

        let outcome = timeout(Duration::from_secs(timeout_secs), child.wait()).await;

        // Whatever the child left running in the background dies with it,
        // so nothing outlives the run or keeps the pipes open.
        group.kill();

        let status = match outcome {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                kill_and_reap(&mut child).await;
                stdout_task.abort();
                stderr_task.abort();
                return Err(RunError::Wait(e));
            }
            Err(_) => {
                warn!("Code execution timed out after {} seconds", timeout_secs);
                kill_and_reap(&mut child).await;
                stdout_task.abort();
                stderr_task.abort();
                let duration_ms = started.elapsed().as_millis() as u64;
                return Ok(ExecutionResult::timed_out(timeout_secs, duration_ms));
            }
        };

        let stdout = collect_output(stdout_task).await?;
        let stderr = collect_output(stderr_task).await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        if status.success() {
            Ok(ExecutionResult::completed(stdout, duration_ms))
        } else {
            Ok(ExecutionResult::failed(stdout, stderr, status.code(), duration_ms))
        }
    }

    fn create_workdir(&self) -> Result<tempfile::TempDir, RunError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("fingge-run-");
        match &self.config.work_dir {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(RunError::WorkDir)
    }
}

/// Kill the child unconditionally and wait for it so no zombie is left.
async fn kill_and_reap(child: &mut Child) {
    if let Err(e) = child.kill().await {
        // Already exited between the timeout firing and the kill.
        debug!("Kill after timeout failed: {}", e);
    }
}

/// The process group a run's interpreter leads.
///
/// The interpreter is spawned as a group leader, so its pid is the group id
/// and every process it forks inherits the group unless it calls `setsid`.
struct ProcessGroup(Option<u32>);

impl ProcessGroup {
    fn of(child: &Child) -> Self {
        Self(child.id())
    }

    #[cfg(unix)]
    fn kill(&self) {
        let Some(pgid) = self.0.and_then(|id| libc::pid_t::try_from(id).ok()) else {
            return;
        };
        // SAFETY: killpg only sends a signal; pgid is the group created for
        // this run, so no unrelated process is targeted.
        let rc = unsafe { libc::killpg(pgid, libc::SIGKILL) };
        if rc != 0 {
            let err = std::io::Error::last_os_error();
            // ESRCH: every member has already exited.
            if err.raw_os_error() != Some(libc::ESRCH) {
                warn!("killpg({}) failed: {}", pgid, err);
            }
        }
    }

    #[cfg(not(unix))]
    fn kill(&self) {}
}

async fn collect_output(
    task: tokio::task::JoinHandle<std::io::Result<String>>,
) -> Result<String, RunError> {
    task.await
        .map_err(RunError::Reader)?
        .map_err(RunError::Wait)
}

/// Drain `reader` to EOF, keeping at most `limit` bytes.
///
/// The pipe keeps being read past the limit so the child never blocks on a
/// full pipe.
async fn read_capped<R>(reader: Option<R>, limit: usize) -> std::io::Result<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let Some(mut reader) = reader else {
        return Ok(String::new());
    };

    let mut kept = Vec::new();
    let mut truncated = false;
    let mut buf = [0u8; 8192];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let room = limit.saturating_sub(kept.len());
        if n > room {
            truncated = true;
        }
        kept.extend_from_slice(&buf[..n.min(room)]);
    }

    let mut text = String::from_utf8_lossy(&kept).into_owned();
    if truncated {
        text.push_str(TRUNCATION_MARKER);
    }
    Ok(text)
}
