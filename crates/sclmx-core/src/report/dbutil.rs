//! DBUTIL batch job template.
//!
//! The job runs `FLMCMD DBUTIL` under ISPF in batch and writes the report to
//! the `REPT` SYSOUT in the fixed line format the grammar expects.

use crate::model::SclmLocation;

/// Report-format directive passed to DBUTIL. Produces one line per member:
/// `changeGroup.type(member) <date time> user version`.
pub const DBUTIL_REPORT_FORMAT: &str =
    "@@FLMCLV.@@FLMTYP(@@FLMMBR) <@@FLMCD4 @@FLMCTM> @@FLMCUS @@FLMMVR";

/// Render the complete job text.
///
/// `job_card` is the JOB statement (and any JCL that must precede the
/// step); it is emitted verbatim, followed by the DBUTIL step.
pub fn render_job(job_card: &str, location: &SclmLocation) -> String {
    let mut job = String::new();
    job.push_str(job_card.trim_end_matches(['\r', '\n']));
    job.push('\n');
    job.push_str("//SYSTSIN  DD *\n");
    job.push_str("  ISPSTART CMD(FLMCMD FILE,DBUWORK)\n");
    job.push_str("/*\n");
    job.push_str("//MSGS     DD SYSOUT=*\n");
    job.push_str("//REPT     DD SYSOUT=*\n");
    job.push_str("//TAIL     DD SYSOUT=*\n");
    job.push_str("//DBUWORK  DD *\n");
    job.push_str("DBUTIL,\n");
    job.push_str(&format!("+{},\n", location.project));
    job.push_str(&format!("+{},\n", location.alternate));
    job.push_str(&format!("+{},,,,,,\n", location.group));
    job.push_str("+*,*,*,*,*,*,*,YES,*,*,,,,NORMAL,N,N,,MSGS,REPT,TAIL,\n");
    job.push_str(&format!("+{}\n", DBUTIL_REPORT_FORMAT));
    job.push_str("/*");
    job
}
