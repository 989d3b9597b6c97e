use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::parser::parse_solver_output;
use super::response::SolverResult;
use super::{SolveRequest, Solver, SolverOutcome};

/// SAT, unknown, UNSAT and optimum-found in clingo's exit-code convention.
pub const ACCEPTED_EXIT_CODES: [i32; 4] = [0, 10, 20, 30];

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs a clingo-compatible binary as a subprocess, one call per request.
#[derive(Debug, Clone)]
pub struct ClingoSolver {
    binary: PathBuf,
}

impl Default for ClingoSolver {
    fn default() -> Self {
        Self::new("clingo")
    }
}

impl ClingoSolver {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Arguments after the binary: inputs, `0` for all answer sets, JSON
    /// output, then one `--const` pair per configuration entry.
    pub fn command_args(request: &SolveRequest<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            request.model.into(),
            request.dataset.into(),
            request.split.into(),
            "0".into(),
            "--outf=2".into(),
        ];
        args.extend(request.configuration.const_args().into_iter().map(OsString::from));
        args
    }
}

impl Solver for ClingoSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> SolverOutcome {
        let args = Self::command_args(request);
        tracing::debug!(
            binary = %self.binary.display(),
            args = ?args,
            timeout_secs = request.timeout.as_secs_f64(),
            "invoking solver"
        );

        let started = Instant::now();
        let mut child = match Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                return SolverOutcome::Failed {
                    reason: format!("failed to spawn {}: {err}", self.binary.display()),
                }
            }
        };

        // Drain both pipes while waiting so a verbose solver cannot block.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match wait_with_timeout(&mut child, request.timeout, started) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return SolverOutcome::TimedOut {
                    elapsed: started.elapsed(),
                };
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return SolverOutcome::Failed {
                    reason: format!("failed to wait for solver: {err}"),
                };
            }
        };
        let runtime = started.elapsed();
        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        let exit_code = status.code();
        tracing::debug!(?exit_code, runtime_secs = runtime.as_secs_f64(), "solver finished");

        if !exit_code.is_some_and(|code| ACCEPTED_EXIT_CODES.contains(&code)) {
            return SolverOutcome::Failed {
                reason: describe_exit(status, &stderr),
            };
        }

        match parse_solver_output(&stdout) {
            Ok(calls) => SolverOutcome::Solved(SolverResult {
                calls,
                exit_code,
                runtime,
            }),
            Err(err) => SolverOutcome::Failed {
                reason: format!("malformed solver output: {err}"),
            },
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    started: Instant,
) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let elapsed = started.elapsed();
        if elapsed >= timeout {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
    }
}

fn describe_exit(status: ExitStatus, stderr: &str) -> String {
    match stderr.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => format!("solver exited with {status}: {line}"),
        None => format!("solver exited with {status}"),
    }
}
