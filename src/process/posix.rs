use errno::Errno;
use libc::{pid_t, ENOTSUP};
use super::Error;

// No kern.proc.pid facility on this host.
pub fn query(_pid: pid_t) -> Result<Vec<u8>, Error> {
    Err(Error::Lookup(Errno(ENOTSUP)))
}
