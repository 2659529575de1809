// Darwin LP64 kinfo_proc layout, 648 bytes. The kernel owns this struct
// and its shape can change between OS revisions, so the record length is
// checked before any field is read and every offset below is specific to
// this one layout.

use libc::pid_t;
use super::{Error, Snapshot, Status, Timeval};

pub(crate) const RECORD_SIZE: usize = 648;

// Capacity of the p_comm field, terminator included, and of the embedded
// credential's group array.
pub(crate) const COMM_SIZE: usize = 17;
pub(crate) const NGROUPS:   usize = 16;

pub(crate) const P_STARTTIME_SEC:  usize = 0;
pub(crate) const P_STARTTIME_USEC: usize = 8;
pub(crate) const P_FLAG:           usize = 32;
pub(crate) const P_STAT:           usize = 36;
pub(crate) const P_COMM:           usize = 243;
pub(crate) const E_UCRED_UID:      usize = 420;
pub(crate) const E_UCRED_NGROUPS:  usize = 424;
pub(crate) const E_UCRED_GROUPS:   usize = 428;
pub(crate) const E_PPID:           usize = 560;
pub(crate) const E_PGID:           usize = 564;

const SIDL:   u8 = 1;
const SRUN:   u8 = 2;
const SSLEEP: u8 = 3;
const SSTOP:  u8 = 4;
const SZOMB:  u8 = 5;

pub(crate) fn decode(pid: pid_t, record: &[u8]) -> Result<Snapshot, Error> {
    if record.len() != RECORD_SIZE {
        let msg = format!("record length {}, layout is {} bytes", record.len(), RECORD_SIZE);
        return Err(Error::Schema(msg));
    }

    Ok(Snapshot {
        pid:     pid,
        ppid:    int32(record, E_PPID),
        pgid:    int32(record, E_PGID),
        status:  status(record[P_STAT])?,
        flags:   int32(record, P_FLAG),
        uid:     uint32(record, E_UCRED_UID),
        groups:  groups(record),
        comm:    comm(record),
        started: Timeval {
            sec:  int64(record, P_STARTTIME_SEC),
            usec: int32(record, P_STARTTIME_USEC),
        },
    })
}

fn status(code: u8) -> Result<Status, Error> {
    match code {
        SIDL   => Ok(Status::Idle),
        SRUN   => Ok(Status::Run),
        SSLEEP => Ok(Status::Sleep),
        SSTOP  => Ok(Status::Stop),
        SZOMB  => Ok(Status::Zombie),
        code   => Err(Error::Schema(format!("unknown process status {}", code))),
    }
}

// Every byte of the field is copied, then the value is cut at the first
// NUL, which the kernel does not guarantee to write.
fn comm(record: &[u8]) -> String {
    let comm = &record[P_COMM..P_COMM + COMM_SIZE];
    let len  = comm.iter().position(|&b| b == 0).unwrap_or(COMM_SIZE);
    String::from_utf8_lossy(&comm[..len]).into_owned()
}

fn groups(record: &[u8]) -> Vec<u32> {
    let count = int16(record, E_UCRED_NGROUPS).max(0) as usize;
    (0..count.min(NGROUPS)).map(|n| {
        uint32(record, E_UCRED_GROUPS + n * 4)
    }).collect()
}

fn int16(record: &[u8], offset: usize) -> i16 {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&record[offset..offset + 2]);
    i16::from_ne_bytes(bytes)
}

fn int32(record: &[u8], offset: usize) -> i32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&record[offset..offset + 4]);
    i32::from_ne_bytes(bytes)
}

fn uint32(record: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&record[offset..offset + 4]);
    u32::from_ne_bytes(bytes)
}

fn int64(record: &[u8], offset: usize) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&record[offset..offset + 8]);
    i64::from_ne_bytes(bytes)
}
