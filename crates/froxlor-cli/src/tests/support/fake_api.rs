//! Fake panel API for end-to-end shell tests.
//!
//! A mock TCP server that accepts one connection per queued response line,
//! records the request it reads, and answers with the canned line — enough
//! to exercise the real socket client without a panel.

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};

pub(in crate::tests) struct FakeApi {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<Result<()>>>,
}

impl FakeApi {
    /// Spawns a fake API on an ephemeral TCP port answering each incoming
    /// connection with the next canned response line.
    pub(in crate::tests) fn spawn(responses: Vec<String>) -> Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).context("bind fake api")?;
        listener
            .set_nonblocking(true)
            .context("fake api nonblocking")?;
        let port = listener.local_addr().context("local addr")?.port();
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let requests_clone = Arc::clone(&requests);
        let handle = thread::spawn(move || Self::serve(listener, responses, &requests_clone));
        Ok(Self {
            port,
            requests,
            handle: Some(handle),
        })
    }

    pub(in crate::tests) fn endpoint(&self) -> String {
        format!("tcp://127.0.0.1:{}", self.port)
    }

    /// Waits for the server thread and returns the recorded request lines.
    pub(in crate::tests) fn take_requests(&mut self) -> Result<Vec<String>> {
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| anyhow!("fake api thread panicked"))?
                .context("fake api failed")?;
        }
        let requests = self
            .requests
            .lock()
            .map_err(|error| anyhow!("lock requests: {error}"))?;
        Ok(requests.clone())
    }

    fn serve(
        listener: TcpListener,
        responses: Vec<String>,
        requests: &Arc<Mutex<Vec<String>>>,
    ) -> Result<()> {
        let deadline = Instant::now() + Duration::from_secs(2);
        for response in responses {
            let stream = loop {
                match listener.accept() {
                    Ok((stream, _)) => break stream,
                    Err(ref error)
                        if error.kind() == io::ErrorKind::WouldBlock
                            && Instant::now() < deadline =>
                    {
                        thread::sleep(Duration::from_millis(10));
                    }
                    Err(ref error) if error.kind() == io::ErrorKind::WouldBlock => {
                        // The shell never connected; exit cleanly so tests
                        // fail on their own assertions instead of hanging.
                        return Ok(());
                    }
                    Err(error) => return Err(error).context("accept connection"),
                }
            };
            stream.set_nonblocking(false).context("blocking stream")?;

            let mut reader = BufReader::new(stream.try_clone().context("clone stream")?);
            let mut line = String::new();
            reader.read_line(&mut line).context("read request")?;
            requests
                .lock()
                .map_err(|error| anyhow!("lock requests: {error}"))?
                .push(line.trim_end().to_owned());

            let mut writer = stream;
            writer
                .write_all(response.as_bytes())
                .context("write response")?;
            writer.write_all(b"\n").context("write newline")?;
            writer.flush().context("flush response")?;
        }
        Ok(())
    }
}
