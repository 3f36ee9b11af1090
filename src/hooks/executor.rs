//! Runs a hook process and reads the context it hands back.
//!
//! Protocol:
//! - the context is written to stdin as a JSON object, then stdin is closed
//! - stdout may carry any text; the last JSON object in it replaces the context
//! - a non-zero exit status fails the hook

use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use serde_json::Value;

use crate::context::Context;
use crate::error::{Error, Result};

/// Spawns `command` in `cwd`, feeds it `input` and returns its stdout.
///
/// stdin is written from its own thread while stdout is drained, so a hook
/// echoing a large context back cannot stall on a full pipe. Blocks until the
/// process exits; there is no timeout.
///
/// # Errors
/// * `Error::IoError` if the process cannot be spawned, waited on or fed
/// * `Error::FailedHook` if the process exits with a non-zero status
pub fn execute_script(mut command: Command, cwd: &Path, input: Vec<u8>) -> Result<String> {
    debug!("Executing {:?} in {}", command, cwd.display());

    let mut child = command
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()?;

    let writer = child.stdin.take().map(|mut stdin| {
        thread::spawn(move || match stdin.write_all(&input) {
            // The script does not read its input.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Hook closed stdin early");
                Ok(())
            }
            result => result,
        })
    });

    let output = child.wait_with_output()?;
    let written = match writer.map(JoinHandle::join) {
        Some(Ok(result)) => result,
        Some(Err(_)) => Err(io::Error::other("hook stdin writer panicked")),
        None => Ok(()),
    };

    if !output.status.success() {
        warn!("Hook exited with {}", output.status);
        return Err(Error::FailedHook { exit_code: output.status.code() });
    }
    written?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Returns the last complete JSON object found in `output`.
///
/// Every `{` starts a parse attempt; nested objects and braces inside
/// strings are consumed by the JSON parser, so only top-level objects are
/// considered.
pub fn extract_context(output: &str) -> Option<Context> {
    let mut last = None;
    let mut offset = 0;

    while let Some(position) = output[offset..].find('{') {
        let start = offset + position;
        let mut values = serde_json::Deserializer::from_str(&output[start..]).into_iter::<Value>();
        match values.next() {
            Some(Ok(Value::Object(object))) => {
                last = Some(object);
                offset = start + values.byte_offset();
            }
            _ => offset = start + 1,
        }
    }

    last
}
