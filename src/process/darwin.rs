use std::ptr;
use errno::{errno, Errno};
use libc::{c_int, c_void, CTL_KERN, ENOMEM, ESRCH, KERN_PROC, KERN_PROC_PID, pid_t};
use super::{schema, Error};

// kern.proc.pid answers for a pid that has left the process table with a
// zero-length record rather than an error, and with ENOMEM when the live
// record has outgrown the layout this crate was written against.
pub fn query(pid: pid_t) -> Result<Vec<u8>, Error> {
    let mut record = vec![0u8; schema::RECORD_SIZE];
    let mut len    = record.len();
    let mut mib    = [CTL_KERN, KERN_PROC, KERN_PROC_PID, pid as c_int];

    match unsafe { sysctl(&mut mib, &mut record, &mut len) } {
        0 if len == 0 => Err(Error::Lookup(Errno(ESRCH))),
        0             => {
            record.truncate(len);
            Ok(record)
        }
        _ => match errno() {
            Errno(ENOMEM) => {
                let msg = format!("record exceeds the {} byte layout", schema::RECORD_SIZE);
                Err(Error::Schema(msg))
            }
            other => Err(Error::Lookup(other)),
        },
    }
}

unsafe fn sysctl(mib: &mut [c_int], record: &mut [u8], len: &mut usize) -> c_int {
    libc::sysctl(
        mib.as_mut_ptr(),
        mib.len() as u32,
        record.as_mut_ptr() as *mut c_void,
        len,
        ptr::null_mut(),
        0,
    )
}
