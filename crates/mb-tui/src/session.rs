//! Session shell: server list and account plumbing
//!
//! Everything that happens before the birth flow proper: fetching and
//! parsing the metaserver list, and generating random character names
//! for the `*` key in the name prompt. These are independent linear
//! flows sharing no state with the birth state machine.

use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use mb_core::GameRng;
use thiserror::Error;

/// Game server port used when a server entry carries no port record
pub const DEFAULT_PORT: u16 = 18346;

/// Metaserver entries beyond this many are dropped
pub const MAX_SERVERS: usize = 20;

/// Metaserver response size cap
const META_BUF: usize = 8192;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not reach the metaserver: {0}")]
    Connect(#[source] std::io::Error),
    #[error("error while reading the server list: {0}")]
    Read(#[source] std::io::Error),
    #[error("the metaserver returned an empty list")]
    EmptyList,
}

/// One selectable game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    pub name: String,
    pub port: u16,
}

/// One display line of the metaserver screen, in wire order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaLine {
    /// Index into `ServerList::servers`
    Server(usize),
    Notice(String),
}

/// Parsed metaserver response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerList {
    pub lines: Vec<MetaLine>,
    pub servers: Vec<ServerEntry>,
}

/// Parse the raw metaserver payload into selectable entries.
///
/// The payload is a sequence of NUL-terminated records: a record starting
/// with `%` carries the port of the preceding server entry, a record
/// starting with a space is a notice to display verbatim, and anything
/// else names a server.
pub fn parse_server_list(buf: &[u8]) -> ServerList {
    let mut list = ServerList::default();

    for record in buf.split(|&b| b == 0) {
        let text = String::from_utf8_lossy(record);
        let text = text.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }

        if let Some(port_str) = text.strip_prefix('%') {
            if let (Ok(port), Some(entry)) = (port_str.parse(), list.servers.last_mut()) {
                entry.port = port;
            }
        } else if text.starts_with(' ') {
            list.lines.push(MetaLine::Notice(text.to_string()));
        } else {
            if list.servers.len() >= MAX_SERVERS {
                break;
            }
            let name = text
                .split_whitespace()
                .next()
                .unwrap_or(text)
                .to_string();
            list.lines.push(MetaLine::Server(list.servers.len()));
            list.servers.push(ServerEntry {
                name,
                port: DEFAULT_PORT,
            });
        }
    }

    list
}

/// Fetch and parse the server list from a metaserver address.
///
/// Callers degrade to manual host entry on any error; nothing here
/// aborts the session.
pub fn fetch_server_list(addr: &str) -> Result<ServerList, SessionError> {
    let sock_addr = addr
        .to_socket_addrs()
        .map_err(SessionError::Connect)?
        .next()
        .ok_or_else(|| {
            SessionError::Connect(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no address resolved",
            ))
        })?;

    let mut stream =
        TcpStream::connect_timeout(&sock_addr, CONNECT_TIMEOUT).map_err(SessionError::Connect)?;
    stream
        .set_read_timeout(Some(CONNECT_TIMEOUT))
        .map_err(SessionError::Read)?;

    let mut buf = Vec::with_capacity(META_BUF);
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.len() >= META_BUF {
                    buf.truncate(META_BUF);
                    break;
                }
            }
            Err(e) => {
                if buf.is_empty() {
                    return Err(SessionError::Read(e));
                }
                break;
            }
        }
    }

    let list = parse_server_list(&buf);
    if list.servers.is_empty() {
        return Err(SessionError::EmptyList);
    }
    Ok(list)
}

/// Split a manual "host:port" entry into a server entry
pub fn parse_manual_server(input: &str) -> ServerEntry {
    match input.rsplit_once(':') {
        Some((host, port)) => match port.parse() {
            Ok(port) => ServerEntry {
                name: host.to_string(),
                port,
            },
            Err(_) => ServerEntry {
                name: input.to_string(),
                port: DEFAULT_PORT,
            },
        },
        None => ServerEntry {
            name: input.to_string(),
            port: DEFAULT_PORT,
        },
    }
}

const NAME_STARTS: [&str; 10] = [
    "Ar", "Bel", "Cel", "Dor", "El", "Fin", "Gal", "Leg", "Thor", "Val",
];
const NAME_MIDS: [&str; 8] = ["ad", "an", "ar", "eb", "en", "im", "ol", "ua"];
const NAME_ENDS: [&str; 8] = ["dir", "dor", "las", "mir", "nor", "rod", "thil", "wen"];

/// Make a random character name for the `*` key in the name prompt
pub fn random_name(rng: &mut GameRng) -> String {
    let mut name = String::new();
    name.push_str(NAME_STARTS[rng.rn2(NAME_STARTS.len() as u32) as usize]);
    if rng.rn2(2) == 0 {
        name.push_str(NAME_MIDS[rng.rn2(NAME_MIDS.len() as u32) as usize]);
    }
    name.push_str(NAME_ENDS[rng.rn2(NAME_ENDS.len() as u32) as usize]);
    name
}
