//! Running the external unit-conversion oracle.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use desk_config::UnitsConfig;
use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Anything that can answer `<quantity> -> <target unit>` with oracle-formatted text.
pub trait Oracle {
    fn query(&self, quantity: &str, target: &str) -> Result<String, OracleError>;
}

/// Process-level failures talking to the oracle. None of these are retried.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to launch unit oracle `{executable}`: {source}")]
    Launch {
        executable: String,
        #[source]
        source: io::Error,
    },
    #[error("unit oracle `{executable}` terminated abnormally ({status}): {stderr}")]
    Terminated {
        executable: String,
        status: String,
        stderr: String,
    },
    #[error("unit oracle `{executable}` did not finish within {timeout:?}")]
    TimedOut {
        executable: String,
        timeout: Duration,
    },
    #[error("failed to collect unit oracle output: {0}")]
    Io(#[from] io::Error),
}

/// GNU `units` run as a child process, one process per query.
#[derive(Debug, Clone, PartialEq)]
pub struct GnuUnits {
    executable: String,
    timeout: Duration,
}

impl GnuUnits {
    /// Oracle at `executable`, killed if a query runs longer than `timeout`.
    pub fn new(executable: impl Into<String>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
        }
    }

    /// Oracle built from the `[units]` config section.
    pub fn from_config(config: &UnitsConfig) -> Self {
        Self::new(config.executable.clone(), config.timeout())
    }

    /// Program name or path that gets spawned.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Upper bound on one query, output collection included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn wait(&self, child: &mut Child, deadline: Instant) -> Result<ExitStatus, OracleError> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            let now = Instant::now();
            if now >= deadline {
                // kill fails only if the child already exited; reap it either way
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.timed_out());
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    /// Wait for a pipe reader; a descendant holding the pipe open must not outlive the deadline.
    fn collect(
        &self,
        reader: Receiver<io::Result<Vec<u8>>>,
        deadline: Instant,
    ) -> Result<Vec<u8>, OracleError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match reader.recv_timeout(remaining) {
            Ok(bytes) => Ok(bytes?),
            Err(RecvTimeoutError::Timeout) => Err(self.timed_out()),
            Err(RecvTimeoutError::Disconnected) => {
                Err(io::Error::other("oracle pipe reader panicked").into())
            }
        }
    }

    fn timed_out(&self) -> OracleError {
        tracing::warn!(
            "unit oracle `{}` timed out after {:?}",
            self.executable,
            self.timeout
        );
        OracleError::TimedOut {
            executable: self.executable.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for GnuUnits {
    fn default() -> Self {
        Self::from_config(&UnitsConfig::default())
    }
}

impl Oracle for GnuUnits {
    fn query(&self, quantity: &str, target: &str) -> Result<String, OracleError> {
        tracing::debug!("running {} {:?} {:?}", self.executable, quantity, target);
        let deadline = Instant::now() + self.timeout;
        // `--` keeps a negative quantity such as `-2.5degC` from reading as options
        let mut child = Command::new(&self.executable)
            .arg("--")
            .arg(quantity)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OracleError::Launch {
                executable: self.executable.clone(),
                source,
            })?;

        // drained on their own threads so a full pipe cannot stall the child
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());
        let status = self.wait(&mut child, deadline)?;
        let stdout = self.collect(stdout, deadline)?;
        let stderr = String::from_utf8_lossy(&self.collect(stderr, deadline)?).into_owned();

        if status.code().is_none() {
            tracing::warn!("unit oracle `{}` terminated by {}", self.executable, status);
            return Err(OracleError::Terminated {
                executable: self.executable.clone(),
                status: status.to_string(),
                stderr,
            });
        }
        if !status.success() {
            // GNU units exits non-zero on conformability errors; stdout still holds the answer
            tracing::debug!(
                "unit oracle `{}` exited with {}: {}",
                self.executable,
                status,
                stderr.trim()
            );
        }
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<io::Result<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let read = match pipe {
            Some(mut pipe) => pipe.read_to_end(&mut buffer).map(|_| buffer),
            None => Ok(buffer),
        };
        // the receiver is gone once the query has timed out
        let _ = tx.send(read);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_oracle_follows_default_config() {
        let oracle = GnuUnits::default();
        assert_eq!(oracle.executable(), desk_config::DEFAULT_UNITS_EXECUTABLE);
        assert_eq!(
            oracle.timeout(),
            Duration::from_millis(desk_config::DEFAULT_TIMEOUT_MS)
        );
    }

    #[test]
    fn missing_executable_is_a_launch_failure() {
        let oracle = GnuUnits::new("desk-units-oracle-that-does-not-exist", Duration::from_secs(1));
        match oracle.query("1meter", "feet") {
            Err(OracleError::Launch { executable, source }) => {
                assert_eq!(executable, "desk-units-oracle-that-does-not-exist");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected launch failure, got {other:?}"),
        }
    }
}
