use super::AdapterError;
use crate::types::config::PATH_PLACEHOLDER;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone)]
pub struct ToolRun {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

pub fn build_argv(command: &[String], artifact: &Path) -> Vec<String> {
    let artifact = artifact.to_string_lossy();
    let mut substituted = false;
    let mut argv = command
        .iter()
        .map(|arg| {
            if arg.contains(PATH_PLACEHOLDER) {
                substituted = true;
                arg.replace(PATH_PLACEHOLDER, &artifact)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>();
    if !substituted {
        argv.push(artifact.into_owned());
    }
    argv
}

/// Runs one analyzer to completion or until `timeout` elapses.
///
/// The deadline covers both the process and its output pipes: a background
/// grandchild holding stdout open cannot stall the caller past `timeout`.
/// The exit status is reported but never treated as a failure.
pub fn run_tool(
    tool: &str,
    command: &[String],
    artifact: &Path,
    timeout: Duration,
) -> Result<ToolRun, AdapterError> {
    if command.is_empty() {
        return Err(AdapterError::EmptyCommand(tool.to_string()));
    }
    let argv = build_argv(command, artifact);
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| AdapterError::EmptyCommand(tool.to_string()))?;

    debug!(tool, ?argv, "spawning analyzer");
    let started = Instant::now();
    // None when the configured timeout is too large to represent.
    let deadline = started.checked_add(timeout);
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| AdapterError::Spawn {
            tool: tool.to_string(),
            source,
        })?;

    let (sender, chunks) = mpsc::channel();
    drain(child.stdout.take(), Stream::Stdout, sender.clone());
    drain(child.stderr.take(), Stream::Stderr, sender);

    let timed_out = || AdapterError::Timeout {
        tool: tool.to_string(),
        timeout,
    };
    let status = wait_with_deadline(tool, &mut child, deadline)
        .map_err(|error| error.unwrap_or_else(timed_out))?;
    let (stdout, stderr) = collect_output(&chunks, deadline).ok_or_else(timed_out)?;

    let run = ToolRun {
        stdout,
        stderr,
        exit_code: status.code(),
    };
    debug!(
        tool,
        exit_code = ?run.exit_code,
        elapsed_ms = started.elapsed().as_millis() as u64,
        stdout_bytes = run.stdout.len(),
        "analyzer finished"
    );
    Ok(run)
}

// `Err(None)` means the deadline passed and the child was killed.
fn wait_with_deadline(
    tool: &str,
    child: &mut Child,
    deadline: Option<Instant>,
) -> Result<ExitStatus, Option<AdapterError>> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if deadline.is_some_and(|deadline| Instant::now() >= deadline) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(None);
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                let _ = child.kill();
                return Err(Some(AdapterError::Wait {
                    tool: tool.to_string(),
                    source,
                }));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(
    pipe: Option<R>,
    stream: Stream,
    sender: Sender<(Stream, Vec<u8>)>,
) {
    if let Some(mut reader) = pipe {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = reader.read_to_end(&mut buffer);
            let _ = sender.send((stream, buffer));
        });
    }
}

// `None` when the deadline passes before both pipes reach EOF.
fn collect_output(
    chunks: &Receiver<(Stream, Vec<u8>)>,
    deadline: Option<Instant>,
) -> Option<(String, String)> {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    loop {
        let received = match deadline {
            Some(deadline) => {
                chunks.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => chunks.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok((Stream::Stdout, bytes)) => stdout = bytes,
            Ok((Stream::Stderr, bytes)) => stderr = bytes,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => return None,
        }
    }
    Some((
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    ))
}
