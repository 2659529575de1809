use errno::Errno;
use libc::pid_t;
use log::debug;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Snapshot {
    pub pid:     pid_t,
    pub ppid:    pid_t,
    pub pgid:    pid_t,
    pub status:  Status,
    pub flags:   i32,
    pub uid:     u32,
    pub groups:  Vec<u32>,
    pub comm:    String,
    pub started: Timeval,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum Status {
    Idle,
    Run,
    Sleep,
    Stop,
    Zombie,
}

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Timeval {
    pub sec:  i64,
    pub usec: i32,
}

// One point-in-time query of the kernel process table. The snapshot is a
// copy and does not track the live process; a pid that has left the table
// yields an error, never stale data.
pub fn lookup(pid: pid_t) -> Result<Snapshot, Error> {
    if pid <= 0 {
        return Err(Error::Lookup(Errno(libc::EINVAL)));
    }

    ext::query(pid).and_then(|record| {
        schema::decode(pid, &record)
    }).map_err(|e| {
        debug!("lookup of pid {} failed: {}", pid, e);
        e
    })
}

pub use error::Error;

mod error;
mod schema;

#[cfg(target_os = "macos")]
#[path = "darwin.rs"]
mod ext;

#[cfg(not(target_os = "macos"))]
#[path = "posix.rs"]
mod ext;
