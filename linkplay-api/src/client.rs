use http_client::{HttpClient, Transport};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::command::Command;
use crate::{ApiError, Result};

/// The literal body a device answers with when it accepted a command
pub const ACKNOWLEDGEMENT: &str = "OK";

/// Characters escaped in the `command` query value
///
/// `:` and `/` stay literal so commands keep their `verb:arg` shape on the
/// wire; anything that would end the value or the query is escaped.
const COMMAND_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A client for one LinkPlay device's local HTTP control endpoint
///
/// Requests go to `http://{host}/httpapi.asp?command={cmd}`. The client
/// holds no state beyond the host and its transport, so it is cheap to
/// clone and one instance serves one device.
///
/// # Example
/// ```rust,no_run
/// use linkplay_api::{Command, LinkPlayClient};
///
/// let client = LinkPlayClient::new("192.168.1.20");
/// client.execute(&Command::Play)?;
/// let status_json = client.player_status()?;
/// # Ok::<(), linkplay_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinkPlayClient<T = HttpClient> {
    host: String,
    transport: T,
}

impl LinkPlayClient<HttpClient> {
    /// Create a client for `host` using the default HTTP transport
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_transport(host, HttpClient::new())
    }
}

impl<T: Transport> LinkPlayClient<T> {
    /// Create a client with a custom transport (for tests or host-provided stacks)
    pub fn with_transport(host: impl Into<String>, transport: T) -> Self {
        Self {
            host: host.into(),
            transport,
        }
    }

    /// Host (and optional port) this client talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full request URL for an encoded command, with the value escaped
    pub fn command_url(&self, command: &str) -> String {
        format!(
            "http://{}/httpapi.asp?command={}",
            self.host,
            utf8_percent_encode(command, COMMAND_VALUE)
        )
    }

    /// Send an encoded command and return whatever text the device answered
    ///
    /// Only a transport failure is an error here; the content of the reply
    /// is the caller's business.
    pub fn fetch(&self, command: &str) -> Result<String> {
        let url = self.command_url(command);
        Ok(self.transport.get_text(&url)?)
    }

    /// Fetch the raw `getPlayerStatus` payload
    pub fn player_status(&self) -> Result<String> {
        self.fetch(&Command::GetPlayerStatus.encode())
    }

    /// Send a control command and check the device's acknowledgement
    ///
    /// Any reply other than the literal `OK` is reported as
    /// [`ApiError::NotAcknowledged`] carrying the raw reply.
    pub fn execute(&self, command: &Command) -> Result<()> {
        let encoded = command.encode();
        let response = self.fetch(&encoded)?;

        if command.expects_acknowledgement() && response != ACKNOWLEDGEMENT {
            return Err(ApiError::NotAcknowledged {
                command: encoded,
                response,
            });
        }

        Ok(())
    }
}
