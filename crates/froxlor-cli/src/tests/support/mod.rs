//! Shared helpers for shell tests.

mod fake_api;
mod scripted_client;

pub(in crate::tests) use fake_api::FakeApi;
pub(in crate::tests) use scripted_client::ScriptedClient;

use std::io::Cursor;

use crate::shell::Shell;

/// Runs the prompt loop over a scripted terminal session and returns the
/// full stdout transcript.
pub(in crate::tests) fn run_session(input: &str, client: &mut ScriptedClient) -> String {
    let mut output: Vec<u8> = Vec::new();
    {
        let reader = Cursor::new(input.as_bytes().to_vec());
        let mut shell = Shell::new(reader, &mut output, &mut *client);
        shell.run().expect("shell session completes");
    }
    String::from_utf8(output).expect("utf8 shell output")
}
