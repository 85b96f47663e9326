use std::path::PathBuf;

use clap::Parser;

/// Extract skills from a resume, rank it against the job catalog and, given a job
/// description, score the two against each other. Prints a JSON report to stdout.
#[derive(Debug, Parser)]
#[command(name = "matcher", version, about)]
pub struct Cli {
    /// Resume file (PDF, DOCX or plain text)
    #[arg(value_name = "RESUME")]
    pub resume: PathBuf,

    /// Job description file to score the resume against
    #[arg(value_name = "JOB")]
    pub job: Option<PathBuf>,

    /// Job catalog JSON; overrides JOBS_PATH
    #[arg(long, value_name = "PATH")]
    pub jobs: Option<PathBuf>,

    /// Number of catalog matches to report; overrides MATCH_TOP_N
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_resume_only() {
        let cli = Cli::try_parse_from(["matcher", "cv.pdf"]).unwrap();
        assert_eq!(cli.resume, PathBuf::from("cv.pdf"));
        assert!(cli.job.is_none());
        assert!(cli.jobs.is_none());
    }

    #[test]
    fn test_resume_job_and_overrides() {
        let cli = Cli::try_parse_from([
            "matcher", "cv.docx", "jd.txt", "--jobs", "catalog.json", "--top-n", "3",
        ])
        .unwrap();
        assert_eq!(cli.job, Some(PathBuf::from("jd.txt")));
        assert_eq!(cli.jobs, Some(PathBuf::from("catalog.json")));
        assert_eq!(cli.top_n, Some(3));
    }

    #[test]
    fn test_missing_resume_is_rejected() {
        let err = Cli::try_parse_from(["matcher"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_help_is_not_a_resume_path() {
        let err = Cli::try_parse_from(["matcher", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_top_n_is_rejected() {
        assert!(Cli::try_parse_from(["matcher", "cv.pdf", "--top-n", "many"]).is_err());
    }
}
