use super::*;

pub fn run(args: VerifyArgs) -> Result<()> {
    let document = read_document(&args.document)?;
    let linter = QualityLinter::new()?;
    let findings = linter.lint_document(&document);

    for finding in &findings {
        let location = match finding.verse {
            Some(verse) => format!("{} {}:{}", finding.book_name, finding.chapter, verse),
            None => format!("{} {}", finding.book_name, finding.chapter),
        };
        let translation = finding.translation.as_deref().unwrap_or("-");
        match finding.severity {
            Severity::Issue => warn!(
                kind = ?finding.kind,
                location = %location,
                translation = %translation,
                detail = %finding.detail,
                "quality issue"
            ),
            Severity::Warning | Severity::Note => info!(
                kind = ?finding.kind,
                severity = ?finding.severity,
                location = %location,
                translation = %translation,
                detail = %finding.detail,
                "quality finding"
            ),
        }
    }

    let report = QualityReport::new(&args.document, &document, findings);
    let report_path = args
        .report_path
        .clone()
        .unwrap_or_else(|| default_report_path(&args.document));
    write_json_pretty(&report_path, &report)?;

    info!(
        path = %report_path.display(),
        verses = report.total_verses,
        issues = report.issue_count,
        warnings = report.warning_count,
        notes = report.note_count,
        "verification completed"
    );

    if args.fail_on_issues && report.issue_count > 0 {
        bail!(
            "verification found {} issue(s); see {}",
            report.issue_count,
            report_path.display()
        );
    }

    Ok(())
}
