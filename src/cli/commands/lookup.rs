use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::{
    cafe::{self, CafeError, CafeParams},
    catalog::CityCatalog,
};

#[derive(Parser, Debug)]
#[command(about = "Run a single café query against a catalog and print the result")]
pub struct LookupCommand {
    #[arg(long, help = "City to look up")]
    pub city: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Maximum number of cafés to return")]
    pub count: Option<String>,

    #[arg(long, help = "Case-insensitive substring filter")]
    pub search: Option<String>,

    #[arg(
        short,
        long,
        help = "Path to a TOML city catalog (built-in catalog if not specified)"
    )]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    Rejected(CafeError),
}

impl LookupOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LookupOutcome::Found => ExitCode::SUCCESS,
            LookupOutcome::Rejected(_) => ExitCode::FAILURE,
        }
    }
}

impl LookupCommand {
    pub async fn execute(&self) -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
        let catalog = CityCatalog::load_or_builtin(self.catalog.as_deref())?;
        let outcome = self.run(&catalog, &mut io::stdout().lock(), &mut io::stderr().lock())?;

        Ok(outcome.exit_code())
    }

    /// Writes the rendered body to `out`, or `Error: <message>` to `err`.
    pub fn run(
        &self,
        catalog: &CityCatalog,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<LookupOutcome> {
        let params = CafeParams {
            city: self.city.clone(),
            count: self.count.clone(),
            search: self.search.clone(),
        };

        match cafe::lookup(catalog, params) {
            Ok(body) => {
                writeln!(out, "{}", body)?;
                Ok(LookupOutcome::Found)
            }
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                Ok(LookupOutcome::Rejected(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(city: &str, count: Option<&str>, search: Option<&str>) -> LookupCommand {
        LookupCommand {
            city: Some(city.to_string()),
            count: count.map(String::from),
            search: search.map(String::from),
            catalog: None,
        }
    }

    fn run(cmd: &LookupCommand) -> (LookupOutcome, String, String) {
        let catalog = CityCatalog::builtin().unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let outcome = cmd.run(&catalog, &mut out, &mut err).unwrap();

        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn found_cafes_go_to_stdout() {
        let (outcome, out, err) = run(&command("tula", Some("2"), None));

        assert_eq!(outcome, LookupOutcome::Found);
        assert_eq!(out, "Пряник,Самовар\n");
        assert!(err.is_empty());
    }

    #[test]
    fn empty_result_is_still_found() {
        let (outcome, out, _) = run(&command("moscow", None, Some("фасоль")));

        assert_eq!(outcome, LookupOutcome::Found);
        assert_eq!(out, "\n");
    }

    #[test]
    fn unknown_city_goes_to_stderr() {
        let (outcome, out, err) = run(&command("omsk", None, None));

        assert_eq!(outcome, LookupOutcome::Rejected(CafeError::InvalidCity));
        assert!(out.is_empty());
        assert_eq!(err, "Error: unknown city\n");
    }

    #[test]
    fn bad_count_goes_to_stderr() {
        let (outcome, out, err) = run(&command("tula", Some("-1"), None));

        assert_eq!(outcome, LookupOutcome::Rejected(CafeError::InvalidCount));
        assert!(out.is_empty());
        assert_eq!(err, "Error: incorrect count\n");
    }
}
